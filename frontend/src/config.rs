use freetools_core::HERO_WORDS;

const DEFAULT_CATALOG_PATH: &str = "/resources.json";
const DEFAULT_HERO_VIDEO: &str = "/assets/hero.mp4";

/// Origin the site data is served from. Empty means same origin.
pub fn get_backend_url() -> &'static str {
    option_env!("FREETOOLS_BACKEND_URL").unwrap_or("")
}

pub fn catalog_path() -> &'static str {
    option_env!("FREETOOLS_CATALOG_PATH").unwrap_or(DEFAULT_CATALOG_PATH)
}

/// How the words in the landing hero are presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeroAnimation {
    None,
    Rotate,
    #[default]
    Typewriter,
    VideoBackground,
}

impl HeroAnimation {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "none" | "static" => Some(HeroAnimation::None),
            "rotate" | "rotation" => Some(HeroAnimation::Rotate),
            "typewriter" => Some(HeroAnimation::Typewriter),
            "video" => Some(HeroAnimation::VideoBackground),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LandingConfig {
    pub hero: HeroAnimation,
    pub embed_directory: bool,
    pub words: &'static [&'static str],
    pub video_src: &'static str,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            hero: HeroAnimation::default(),
            embed_directory: false,
            words: &HERO_WORDS,
            video_src: DEFAULT_HERO_VIDEO,
        }
    }
}

impl LandingConfig {
    /// Landing setup baked in at build time via `FREETOOLS_HERO` and
    /// `FREETOOLS_EMBED_DIRECTORY`.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("FREETOOLS_HERO"),
            option_env!("FREETOOLS_EMBED_DIRECTORY"),
        )
    }

    fn from_values(hero: Option<&str>, embed_directory: Option<&str>) -> Self {
        let hero = match hero {
            Some(name) => HeroAnimation::from_name(name).unwrap_or_else(|| {
                gloo_console::warn!(format!("Unknown hero animation '{}', using default", name));
                HeroAnimation::default()
            }),
            None => HeroAnimation::default(),
        };
        let embed_directory = matches!(
            embed_directory.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
            Some("1" | "true" | "yes")
        );
        Self {
            hero,
            embed_directory,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_names() {
        assert_eq!(HeroAnimation::from_name("rotate"), Some(HeroAnimation::Rotate));
        assert_eq!(HeroAnimation::from_name(" Typewriter "), Some(HeroAnimation::Typewriter));
        assert_eq!(HeroAnimation::from_name("video"), Some(HeroAnimation::VideoBackground));
        assert_eq!(HeroAnimation::from_name("none"), Some(HeroAnimation::None));
        assert_eq!(HeroAnimation::from_name("marquee"), None);
    }

    #[test]
    fn defaults_without_env() {
        let config = LandingConfig::from_values(None, None);
        assert_eq!(config.hero, HeroAnimation::Typewriter);
        assert!(!config.embed_directory);
        assert_eq!(config.words, &HERO_WORDS);
    }

    #[test]
    fn embed_flag() {
        assert!(LandingConfig::from_values(Some("rotate"), Some("1")).embed_directory);
        assert!(LandingConfig::from_values(None, Some("TRUE")).embed_directory);
        assert!(!LandingConfig::from_values(None, Some("0")).embed_directory);
    }
}
