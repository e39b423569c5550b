//! Web 服务器主程序入口

use transkarte::env::{core, EnvVar};
use transkarte::web::{WebConfig, WebServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_tracing();

    // 解析命令行参数
    let args: Vec<String> = std::env::args().collect();

    let mut bind_override: Option<String> = None;
    let mut port_override: Option<u16> = None;

    // 简单的命令行参数解析
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" | "-b" => {
                if i + 1 < args.len() {
                    bind_override = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: --bind requires an address");
                    std::process::exit(1);
                }
            }
            "--port" | "-p" => {
                if i + 1 < args.len() {
                    port_override = Some(args[i + 1].parse().unwrap_or_else(|_| {
                        eprintln!("Error: Invalid port number");
                        std::process::exit(1);
                    }));
                    i += 2;
                } else {
                    eprintln!("Error: --port requires a port number");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            _ => {
                eprintln!("Error: Unknown argument: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
    }

    // 环境变量为基础，命令行参数覆盖
    let mut config = WebConfig::from_env()?;
    if let Some(bind_addr) = bind_override {
        config.bind_addr = bind_addr;
    }
    if let Some(port) = port_override {
        config.port = port;
    }

    let server = WebServer::new(config);
    server.start().await?;

    Ok(())
}

/// 按 TRANSKARTE_LOG_LEVEL 初始化日志
fn init_tracing() {
    let level = core::LogLevel::get()
        .ok()
        .and_then(|s| s.parse::<tracing::Level>().ok())
        .unwrap_or(tracing::Level::INFO);

    tracing_subscriber::fmt().with_max_level(level).init();
}

fn print_help() {
    println!("Transkarte Web Server");
    println!();
    println!("USAGE:");
    println!("    transkarte-web [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -b, --bind <ADDRESS>     Bind address [default: 127.0.0.1]");
    println!("    -p, --port <PORT>        Port number [default: 3000]");
    println!("    -h, --help               Print help information");
    println!();
    println!("EXAMPLES:");
    println!("    transkarte-web");
    println!("    transkarte-web --bind 0.0.0.0 --port 8080");
}
