use crate::project_info::{metadata, version_info};
use clap::{Args, Parser, Subcommand};
use codegen_core::constants::config::DEFAULT_CONFIG_FILE;
use codegen_core::naming::TargetLanguage;
use std::path::{Path, PathBuf};

/// MyBatis Generator CLI - 根据建表语句生成 PO 类和 Mapper XML
#[derive(Parser, Debug)]
#[command(name = "mybatis-gen")]
#[command(about = metadata::PROJECT_DESCRIPTION)]
#[command(version = version_info::CLI_VERSION)]
#[command(long_about = metadata::display::DESCRIPTION_LONG)]
#[command(author = metadata::PROJECT_AUTHORS)]
pub struct Cli {
    /// 配置文件路径，指定后必须存在；不指定时依次查找 mybatis-gen.toml、.mybatis-gen.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 详细输出
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// `init` 写入的配置文件路径，未指定 `-c` 时为 mybatis-gen.toml
    pub fn init_config_path(&self) -> &Path {
        self.config
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 根据 CREATE TABLE 语句生成 PO 类和 Mapper XML
    Generate(GenerateArgs),
    /// 创建带注释的默认配置文件
    Init {
        /// 如果配置文件已存在，强制覆盖
        #[arg(long)]
        force: bool,
    },
}

/// generate 命令参数，未指定的项使用配置文件中的值
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// DDL 文件路径，不指定时从标准输入读取
    #[arg(short, long, conflicts_with = "sample")]
    pub input: Option<PathBuf>,

    /// 使用内置的 users 表示例作为输入
    #[arg(long)]
    pub sample: bool,

    /// 输出目录
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// PO 类的目标语言 (java, typescript)
    #[arg(short, long)]
    pub language: Option<TargetLanguage>,

    /// resultMap 的 property 使用驼峰形式
    #[arg(long)]
    pub camel_case_properties: bool,

    /// 只输出到终端，不写文件
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_args() {
        let cli = Cli::try_parse_from([
            "mybatis-gen",
            "-v",
            "generate",
            "--input",
            "users.sql",
            "--language",
            "typescript",
            "--output-dir",
            "out",
            "--camel-case-properties",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.config, None);
        let Commands::Generate(args) = cli.command else {
            panic!("应解析为 generate 命令");
        };
        assert_eq!(args.input, Some(PathBuf::from("users.sql")));
        assert_eq!(args.language, Some(TargetLanguage::TypeScript));
        assert_eq!(args.output_dir, Some(PathBuf::from("out")));
        assert!(args.camel_case_properties);
        assert!(!args.dry_run);
    }

    #[test]
    fn test_input_conflicts_with_sample() {
        let result =
            Cli::try_parse_from(["mybatis-gen", "generate", "--input", "a.sql", "--sample"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        let result = Cli::try_parse_from(["mybatis-gen", "generate", "--language", "cobol"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::try_parse_from(["mybatis-gen", "-c", "custom.toml", "init", "--force"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Commands::Init { force: true }));
        assert_eq!(cli.init_config_path(), Path::new("custom.toml"));

        let cli = Cli::try_parse_from(["mybatis-gen", "init"]).unwrap();
        assert_eq!(cli.init_config_path(), Path::new("mybatis-gen.toml"));
    }
}
