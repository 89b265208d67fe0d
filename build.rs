use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=frontend/dist");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let dist_path = Path::new(&manifest_dir).join("frontend/dist");

    // rust-embed 要求目录存在；面板未构建时写入占位页
    if !dist_path.join("index.html").exists() {
        println!("cargo:warning=frontend/dist not found, embedding placeholder dashboard");
        write_placeholder(&dist_path);
    }
}

fn write_placeholder(dist_path: &Path) {
    fs::create_dir_all(dist_path).expect("Failed to create dist directory");

    let placeholder = r#"<!DOCTYPE html>
<html lang="pt">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>%SYSTEM_NAME% - Painel não compilado</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            max-width: 640px;
            margin: 96px auto;
            padding: 20px;
        }
        .aviso {
            background: #fff3cd;
            border: 1px solid #ffeaa7;
            padding: 20px;
            border-radius: 8px;
        }
        code {
            background: #f1f3f4;
            padding: 2px 6px;
            border-radius: 4px;
        }
    </style>
</head>
<body>
    <h1>%SYSTEM_NAME%</h1>
    <div class="aviso">
        <p>O painel ainda não foi compilado. A API continua disponível em <code>/api</code>.</p>
        <p><code>cd frontend && bun install && bun run build</code></p>
    </div>
</body>
</html>"#;

    fs::write(dist_path.join("index.html"), placeholder)
        .expect("Failed to write placeholder index.html");
}
