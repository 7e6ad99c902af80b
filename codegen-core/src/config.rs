use crate::constants::{config, mapper};
use crate::error::{CodegenError, Result};
use crate::naming::TargetLanguage;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 生成器配置结构
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub mapper: MapperConfig,
}

/// 输出相关配置
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub language: TargetLanguage,
}

/// Mapper 渲染相关配置
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MapperConfig {
    pub property_style: PropertyStyle,
    pub key_parameter_type: String,
}

/// resultMap 中 property 属性的写法
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStyle {
    /// 与列名一致
    #[default]
    Raw,
    /// 驼峰形式
    CamelCase,
}

impl PropertyStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStyle::Raw => "raw",
            PropertyStyle::CamelCase => "camel_case",
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(config::DEFAULT_OUTPUT_DIR),
            language: TargetLanguage::default(),
        }
    }
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            property_style: PropertyStyle::default(),
            key_parameter_type: mapper::DEFAULT_KEY_PARAMETER_TYPE.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// 查找并加载配置文件
    /// 显式指定的路径必须存在，否则返回 `ConfigNotFound`；
    /// 未指定时按顺序查找：mybatis-gen.toml -> .mybatis-gen.toml，
    /// 都不存在时使用默认配置，不会写入任何文件
    pub fn find_and_load_config(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(CodegenError::ConfigNotFound(path.to_path_buf()));
            }
            tracing::info!("使用配置文件: {}", path.display());
            return Self::load_from_file(path);
        }

        for config_file in config::CONFIG_FILE_CANDIDATES {
            if Path::new(config_file).exists() {
                tracing::info!("找到配置文件: {}", config_file);
                return Self::load_from_file(config_file);
            }
        }

        tracing::warn!("未找到配置文件，使用默认配置");
        Ok(Self::default())
    }

    /// 从指定文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let config: GeneratorConfig = toml::from_str(&content)?;

        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml_with_comments();
        fs::write(&path, content)?;
        Ok(())
    }

    /// 生成带注释的TOML配置
    fn to_toml_with_comments(&self) -> String {
        const TEMPLATE: &str = include_str!("../templates/config.toml.template");

        // 占位符替换为 TOML 字符串字面量，路径中的 `\` 和 `"` 会被正确转义
        let quote = |value: &str| toml::Value::String(value.to_string()).to_string();

        TEMPLATE
            .replace("{output_dir}", &quote(&self.output.dir.to_string_lossy()))
            .replace("{language}", &quote(self.output.language.as_str()))
            .replace("{property_style}", &quote(self.mapper.property_style.as_str()))
            .replace("{key_parameter_type}", &quote(&self.mapper.key_parameter_type))
    }

    /// 获取输出目录路径
    pub fn output_dir(&self) -> &Path {
        &self.output.dir
    }
}
