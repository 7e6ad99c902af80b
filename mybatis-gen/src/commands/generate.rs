use crate::app::CliApp;
use crate::cli::GenerateArgs;
use anyhow::{Context, bail};
use codegen_core::config::{GeneratorConfig, PropertyStyle};
use codegen_core::constants::sample::USERS_DDL;
use codegen_core::CodeGenerator;
use std::fs;
use std::io::Read;
use tracing::{debug, info};

/// 执行 generate 命令
pub fn run_generate(app: &CliApp, args: GenerateArgs) -> anyhow::Result<()> {
    let config = apply_overrides(app.config.clone(), &args);
    debug!("生效配置: {:?}", config);

    let ddl = read_ddl(&args, std::io::stdin())?;

    let generator = CodeGenerator::new(&config);
    let artifacts = generator.generate(&ddl).context("生成失败")?;

    if args.dry_run {
        for file in artifacts.files() {
            println!("===== {} =====", file.file_name);
            println!("{}", file.content);
        }
        return Ok(());
    }

    let output_dir = config.output_dir();
    let written = generator
        .write_all(&artifacts, output_dir)
        .with_context(|| format!("写入输出目录失败: {}", output_dir.display()))?;

    info!(
        "🎉 表 {} 生成完成，共写入 {} 个文件",
        artifacts.table.name,
        written.len()
    );
    Ok(())
}

/// 命令行参数覆盖配置文件中的同名项
fn apply_overrides(mut config: GeneratorConfig, args: &GenerateArgs) -> GeneratorConfig {
    if let Some(dir) = &args.output_dir {
        config.output.dir = dir.clone();
    }
    if let Some(language) = args.language {
        config.output.language = language;
    }
    if args.camel_case_properties {
        config.mapper.property_style = PropertyStyle::CamelCase;
    }
    config
}

/// 输入来源优先级：--sample > --input > 标准输入
fn read_ddl<R: Read>(args: &GenerateArgs, mut stdin: R) -> anyhow::Result<String> {
    let ddl = if args.sample {
        info!("使用内置示例 DDL");
        USERS_DDL.to_string()
    } else if let Some(path) = &args.input {
        fs::read_to_string(path)
            .with_context(|| format!("读取 DDL 文件失败: {}", path.display()))?
    } else {
        debug!("从标准输入读取 DDL");
        let mut buffer = String::new();
        stdin
            .read_to_string(&mut buffer)
            .context("从标准输入读取 DDL 失败")?;
        buffer
    };

    if ddl.trim().is_empty() {
        bail!("输入的 DDL 为空");
    }
    Ok(ddl)
}
