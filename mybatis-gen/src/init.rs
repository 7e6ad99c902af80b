use anyhow::Context;
use codegen_core::config::GeneratorConfig;
use std::path::Path;
use tracing::{info, warn};

/// 写入带注释的默认配置文件
pub fn run_init(config_path: &Path, force: bool) -> anyhow::Result<()> {
    if !force && config_path.exists() {
        warn!("⚠️  配置文件已存在: {}", config_path.display());
        info!("如果您要重新初始化，请使用 --force 参数");
        return Ok(());
    }

    GeneratorConfig::default()
        .save_to_file(config_path)
        .with_context(|| format!("创建配置文件失败: {}", config_path.display()))?;
    info!("✅ 创建配置文件: {}", config_path.display());
    info!("💡 运行 'mybatis-gen generate --sample --dry-run' 预览生成结果");

    Ok(())
}
