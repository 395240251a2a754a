use cached::proc_macro::cached;
use config::{Config, File, FileFormat};
use futures_locks::RwLock;
use once_cell::sync::Lazy;
use serde::Deserialize;

static CONFIG_BUILDER: Lazy<RwLock<Config>> = Lazy::new(|| {
    RwLock::new({
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("../Lodge.toml"),
            FileFormat::Toml,
        ));

        if std::path::Path::new("Lodge.toml").exists() {
            builder = builder.add_source(File::new("Lodge.toml", FileFormat::Toml));
        }

        builder.build().unwrap()
    })
});

#[derive(Deserialize, Debug, Clone)]
pub struct Database {
    /// MongoDB connection URI; empty selects the reference database
    pub mongodb: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SiteLimits {
    /// Cards shown in the homepage teaser strip
    pub homepage_events: i64,
    /// Cards shown in the events page upcoming section
    pub upcoming_events: i64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Site {
    /// Prefix for stored flyer image references
    pub image_base: String,
    /// Fallback phone number shown when a form submission fails
    pub contact_phone: String,
    pub limits: SiteLimits,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub database: Database,
    pub site: Site,
}

pub async fn read() -> Config {
    CONFIG_BUILDER.read().await.clone()
}

#[cached(time = 30)]
pub async fn config() -> Settings {
    read().await.try_deserialize::<Settings>().unwrap()
}

#[cfg(test)]
mod tests {
    use crate::config;

    #[async_std::test]
    async fn defaults_deserialize() {
        let settings = config().await;
        assert!(settings.database.mongodb.is_empty());
        assert_eq!(settings.site.image_base, "images/");
        assert!(!settings.site.contact_phone.is_empty());
        assert_eq!(settings.site.limits.homepage_events, 3);
        assert_eq!(settings.site.limits.upcoming_events, 6);
    }
}
