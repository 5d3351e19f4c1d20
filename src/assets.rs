use crate::model::Hero;

const PORTRAIT_IMAGE_DIR: &str = "/apps/dota2/images/dota_react/heroes/";
const PORTRAIT_RENDER_DIR: &str = "/apps/dota2/videos/dota_react/heroes/renders/";

/// Builds asset URLs for a hero against the image host. No network access.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetUrls {
    base_url: String,
}

impl AssetUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Small portrait as served by the API (`img`).
    pub fn image_url(&self, hero: &Hero) -> String {
        format!("{}{}", self.base_url, hero.img.as_deref().unwrap_or(""))
    }

    pub fn icon_url(&self, hero: &Hero) -> String {
        format!("{}{}", self.base_url, hero.icon.as_deref().unwrap_or(""))
    }

    /// Full-size render, which lives under the videos tree next to the animated portrait.
    pub fn portrait_image_url(&self, hero: &Hero) -> String {
        let path = hero
            .img
            .as_deref()
            .map(|img| img.replacen(PORTRAIT_IMAGE_DIR, PORTRAIT_RENDER_DIR, 1))
            .unwrap_or_default();
        format!("{}{}", self.base_url, path)
    }

    pub fn portrait_video_url(&self, hero: &Hero) -> String {
        self.portrait_image_url(hero).replacen(".png", ".webm", 1)
    }
}
