use clap::Parser;
use crud_core::Route;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Browse and edit users and posts of a mock REST API", long_about = None)]
pub struct Config {
    /// Base URL of the REST API serving /users and /posts.
    #[arg(long, env = "CRUD_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Page to open first: /, /users or /posts.
    #[arg(long, default_value = "/", value_parser = parse_route)]
    pub route: Route,

    /// Log filter, in `tracing_subscriber::EnvFilter` syntax. Logs go to stderr.
    #[arg(long, env = "CRUD_LOG", default_value = "warn")]
    pub log: String,
}

fn parse_route(value: &str) -> Result<Route, String> {
    Route::resolve(value).ok_or_else(|| {
        let known: Vec<_> = Route::ALL.iter().map(Route::path).collect();
        format!("unknown route '{value}' (expected one of: {})", known.join(", "))
    })
}
