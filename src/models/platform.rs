use serde::{Deserialize, Serialize};

/// Aspect ratio used when a platform id has no table entry.
pub const DEFAULT_ASPECT_RATIO: &str = "1:1";

/// Target publishing platform. The id strings double as display labels, so
/// they carry both the platform name and the ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Douyin,
    Xiaohongshu,
    Bilibili,
    Youtube,
}

impl Platform {
    pub fn id(&self) -> &'static str {
        match self {
            Platform::Douyin => "抖音 (9:16)",
            Platform::Xiaohongshu => "小红书 (3:4)",
            Platform::Bilibili => "B站 (4:3)",
            Platform::Youtube => "YouTube (16:9)",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlatformConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub ratio_label: &'static str,
    pub ratio_value: &'static str,
    pub description: &'static str,
}

/// The closed set of supported platforms. Adding one means extending this
/// table, not runtime configuration.
pub const PLATFORM_CONFIGS: [PlatformConfig; 4] = [
    PlatformConfig {
        id: "抖音 (9:16)",
        name: "抖音",
        ratio_label: "9:16",
        ratio_value: "9:16",
        description: "全面屏竖屏，适合短视频",
    },
    PlatformConfig {
        id: "小红书 (3:4)",
        name: "小红书",
        ratio_label: "3:4",
        ratio_value: "3:4",
        description: "经典竖屏，图文笔记首选",
    },
    PlatformConfig {
        id: "B站 (4:3)",
        name: "B站",
        ratio_label: "4:3",
        ratio_value: "4:3",
        description: "传统视频封面比例",
    },
    PlatformConfig {
        id: "YouTube (16:9)",
        name: "YouTube",
        ratio_label: "16:9",
        ratio_value: "16:9",
        description: "横屏宽视频标准",
    },
];

pub fn platform_config(id: &str) -> Option<&'static PlatformConfig> {
    PLATFORM_CONFIGS.iter().find(|config| config.id == id)
}

/// Resolves the generation aspect-ratio hint for a platform id. Unknown ids
/// fall back to [`DEFAULT_ASPECT_RATIO`] rather than failing.
pub fn aspect_ratio(platform_id: &str) -> &'static str {
    platform_config(platform_id)
        .map(|config| config.ratio_value)
        .unwrap_or(DEFAULT_ASPECT_RATIO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_platform_ratios() {
        assert_eq!(aspect_ratio(Platform::Douyin.id()), "9:16");
        assert_eq!(aspect_ratio(Platform::Xiaohongshu.id()), "3:4");
        assert_eq!(aspect_ratio(Platform::Bilibili.id()), "4:3");
        assert_eq!(aspect_ratio(Platform::Youtube.id()), "16:9");
    }

    #[test]
    fn test_unknown_platform_falls_back() {
        assert_eq!(aspect_ratio("快手 (1:1)"), DEFAULT_ASPECT_RATIO);
        assert_eq!(aspect_ratio(""), DEFAULT_ASPECT_RATIO);
    }

    #[test]
    fn test_every_platform_has_a_config_entry() {
        for platform in [
            Platform::Douyin,
            Platform::Xiaohongshu,
            Platform::Bilibili,
            Platform::Youtube,
        ] {
            assert!(platform_config(platform.id()).is_some());
        }
    }
}
