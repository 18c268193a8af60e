#[cfg(test)]
pub mod test {
    use crate::bindable;

    /// Mirrors the shape most tests decode into: two nested sections.
    /// `db` is declared before `http`, which some ordering tests rely on.
    #[derive(Debug, Default, PartialEq)]
    pub struct TestConfig {
        pub db: DbConfig,
        pub http: HttpConfig,
    }

    bindable!(TestConfig {
        db => Nested,
        http => Nested,
    });

    #[derive(Debug, Default, PartialEq)]
    pub struct HttpConfig {
        pub port: u64,
    }

    bindable!(HttpConfig { port => Uint });

    #[derive(Debug, Default, PartialEq)]
    pub struct DbConfig {
        pub url: String,
    }

    bindable!(DbConfig { url => Str });

    /// A wider fixture: rename, sequence, and a nested section whose keys
    /// only ever arrive through environment bindings.
    #[derive(Debug, Default, PartialEq)]
    pub struct AppConfig {
        pub base_url: String,
        pub origins: Vec<String>,
        pub api: ApiConfig,
    }

    bindable!(AppConfig {
        base_url as "baseurl" => Str,
        origins => StrList,
        api => Nested,
    });

    #[derive(Debug, Default, PartialEq)]
    pub struct ApiConfig {
        pub api_key: String,
    }

    bindable!(ApiConfig { api_key as "apikey" => Str });
}
