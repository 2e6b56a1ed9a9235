use crate::{DistributeArgs, GenerateArgs};
use anyhow::{Context, Result};
use mipmap::{Distribute, Filter, Generate, MappingEntry, SizeMapping, Strategy};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = "xicon.yaml";

const DEFAULT_RES: &str = "android/app/src/main/res";
const DEFAULT_SOURCE: &str = "my_icons";
const DEFAULT_ICON: &str = "android/app/src/main/res/drawable/ic_brand_logo.png";

#[derive(Clone, Debug, Default)]
pub struct Config {
    res: Option<PathBuf>,
    distribute: DistributeConfig,
    generate: GenerateConfig,
}

impl Config {
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Default::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: RawConfig = serde_yaml::from_str(contents)?;
        Ok(Self {
            res: config.res,
            distribute: config.distribute.unwrap_or_default(),
            generate: config.generate.unwrap_or_default(),
        })
    }

    fn res(&self, arg: Option<&Path>) -> PathBuf {
        arg.or(self.res.as_deref())
            .unwrap_or(Path::new(DEFAULT_RES))
            .to_path_buf()
    }

    pub fn distribute(&self, args: &DistributeArgs) -> Distribute {
        let config = &self.distribute;
        Distribute {
            source: args
                .source
                .as_deref()
                .or(config.source.as_deref())
                .unwrap_or(Path::new(DEFAULT_SOURCE))
                .to_path_buf(),
            res: self.res(args.common.res.as_deref()),
            mapping: mapping(&args.mapping, config.mapping.as_ref(), SizeMapping::lenient),
            strategy: args.strategy.or(config.strategy).unwrap_or_default(),
        }
    }

    pub fn generate(&self, args: &GenerateArgs) -> Generate {
        let config = &self.generate;
        Generate {
            icon: args
                .icon
                .as_deref()
                .or(config.icon.as_deref())
                .unwrap_or(Path::new(DEFAULT_ICON))
                .to_path_buf(),
            res: self.res(args.common.res.as_deref()),
            mapping: mapping(&args.mapping, config.mapping.as_ref(), SizeMapping::canonical),
            filter: args.filter.or(config.filter).unwrap_or_default(),
            optimize: args.optimize || config.optimize,
        }
    }
}

fn mapping(
    args: &[MappingEntry],
    config: Option<&SizeMapping>,
    default: fn() -> SizeMapping,
) -> SizeMapping {
    if !args.is_empty() {
        return args.iter().copied().collect();
    }
    config.cloned().unwrap_or_else(default)
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    res: Option<PathBuf>,
    distribute: Option<DistributeConfig>,
    generate: Option<GenerateConfig>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DistributeConfig {
    source: Option<PathBuf>,
    strategy: Option<Strategy>,
    mapping: Option<SizeMapping>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct GenerateConfig {
    icon: Option<PathBuf>,
    filter: Option<Filter>,
    #[serde(default)]
    optimize: bool,
    mapping: Option<SizeMapping>,
}
