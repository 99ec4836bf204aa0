use std::env;

pub const DEFAULT_USD_TO_SYP: i64 = 15000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Static exchange rate used when pricing seeded products.
    pub usd_to_syp: i64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8000);
        let usd_to_syp = parse_rate(env::var("USD_TO_SYP").ok().as_deref());
        Ok(Self {
            port,
            database_url,
            host,
            usd_to_syp,
        })
    }
}

fn parse_rate(raw: Option<&str>) -> i64 {
    raw.and_then(|r| r.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_USD_TO_SYP)
}
