use serde::Deserialize;

/// One tracked platform: the `resp_list` position its data sits at in the
/// raw export, plus the label and line color the dashboard shows for it.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PlatformMapping {
    pub position: usize,
    pub name: String,
    pub color: String,
}

/// The two mapping profiles shipped with the dashboard: the full five-way
/// comparison and the delivery-only subset the main chart defaults to.
#[derive(Debug, Deserialize, Clone)]
pub struct PlatformProfiles {
    #[serde(default)]
    pub five_platforms: Vec<PlatformMapping>,
    #[serde(default)]
    pub delivery_platforms: Vec<PlatformMapping>,
}

impl Default for PlatformProfiles {
    fn default() -> Self {
        Self {
            five_platforms: vec![
                mapping(0, "京东", "#E3002B"),
                mapping(1, "美团", "#FFD100"),
                mapping(2, "美团外卖", "#FF6600"),
                mapping(3, "饿了么", "#0078FF"),
                mapping(4, "京东外卖", "#AA2116"),
            ],
            delivery_platforms: vec![
                mapping(2, "美团外卖", "#FF6600"),
                mapping(3, "饿了么", "#0078FF"),
                mapping(4, "京东外卖", "#E53E3E"),
            ],
        }
    }
}

fn mapping(position: usize, name: &str, color: &str) -> PlatformMapping {
    PlatformMapping {
        position,
        name: name.to_string(),
        color: color.to_string(),
    }
}

pub fn load_platform_profiles() -> anyhow::Result<PlatformProfiles> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/platforms"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
