use codegen_core::{config::GeneratorConfig, error::Result};
use std::path::Path;

use crate::cli::GenerateArgs;
use crate::commands;

#[derive(Debug, Clone)]
pub struct CliApp {
    pub config: GeneratorConfig,
}

impl CliApp {
    /// 加载配置并初始化CLI应用
    ///
    /// 显式指定的配置文件不存在时返回错误；未指定且找不到配置文件时使用默认配置
    pub fn new_with_config(config_path: Option<&Path>) -> Result<Self> {
        let config = GeneratorConfig::find_and_load_config(config_path)?;

        Ok(Self { config })
    }

    /// 运行 generate 命令
    pub fn run(&self, args: GenerateArgs) -> anyhow::Result<()> {
        commands::run_generate(self, args)
    }
}
