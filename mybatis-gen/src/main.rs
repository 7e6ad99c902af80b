use clap::Parser;
use codegen_core::CodegenError;
use mybatis_gen::{Cli, CliApp, Commands, get_version_string, run_init, setup_logging};
use tracing::{debug, error};

fn main() {
    // 解析命令行参数
    let cli = Cli::parse();

    // 设置日志记录
    setup_logging(cli.verbose);
    debug!("{}", get_version_string());

    // `init` 命令是特例，它不需要预先加载配置
    let args = match cli.command {
        Commands::Init { force } => {
            if let Err(e) = run_init(cli.init_config_path(), force) {
                error!("❌ 初始化失败: {:#}", e);
                std::process::exit(1);
            }
            return;
        }
        Commands::Generate(args) => args,
    };

    let app = match CliApp::new_with_config(cli.config.as_deref()) {
        Ok(app) => app,
        Err(CodegenError::ConfigNotFound(path)) => {
            error!(
                "❌ 配置文件 '{}' 未找到，可先运行 'mybatis-gen -c {} init' 创建",
                path.display(),
                path.display()
            );
            std::process::exit(1);
        }
        Err(e) => {
            error!("❌ 加载配置失败: {}", e);
            std::process::exit(1);
        }
    };

    // 运行命令
    if let Err(e) = app.run(args) {
        error!("❌ 操作失败: {:#}", e);
        std::process::exit(1);
    }
}
