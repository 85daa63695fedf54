use std::process::Command;

/// Plain stylesheet used when the Tailwind CLI is not installed.
const FALLBACK_CSS: &str = r#"*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: system-ui, -apple-system, sans-serif; line-height: 1.6; }
a { color: inherit; text-decoration: none; }
.page { min-height: 100vh; background: #f4f4f8; color: #111827; transition: background 0.3s; }
.dark .page { background: #1e1e1e; color: #fff; }
.container { max-width: 80rem; margin: 0 auto; padding: 2rem 1rem; }
.site-header { background: #fff; border-bottom: 1px solid #e5e7eb; }
.dark .site-header { background: #111827; border-color: #1f2937; }
.nav { max-width: 80rem; margin: 0 auto; padding: 0 1rem; height: 4rem; display: flex; align-items: center; gap: 1.5rem; }
.brand { font-size: 1.5rem; font-weight: 700; color: #2d2a73; }
.dark .brand, .dark .nav-link.active, .dark .hero h1 { color: #7c7cf4; }
.nav-links { display: flex; gap: 1rem; }
.nav-link { font-weight: 500; color: #4b5563; }
.nav-link.active { color: #2d2a73; }
.nav-actions { margin-left: auto; display: flex; align-items: center; gap: 0.75rem; }
.user-label { font-size: 0.875rem; font-weight: 500; }
.btn { display: inline-flex; align-items: center; padding: 0.5rem 1rem; border: none; border-radius: 0.5rem; background: #2d2a73; color: #fff; font-weight: 500; cursor: pointer; }
.btn:disabled { background: #7c7cf4; cursor: default; }
.icon-btn { padding: 0.5rem; border: none; border-radius: 0.5rem; background: transparent; color: inherit; cursor: pointer; }
.hero { text-align: center; margin-bottom: 3rem; }
.hero h1 { font-size: 2.5rem; font-weight: 700; color: #2d2a73; margin-bottom: 1rem; }
.hero p { max-width: 42rem; margin: 0 auto; font-size: 1.125rem; color: #4b5563; }
.section-head { margin-bottom: 2rem; }
.section-head h1 { font-size: 1.875rem; font-weight: 700; }
.tabs { display: flex; width: fit-content; margin: 0 auto 2rem; padding: 0.25rem; border-radius: 0.5rem; background: #fff; }
.dark .tabs, .dark .card, .dark .panel, .dark .stat { background: #1f2937; }
.tab { padding: 0.5rem 1.5rem; border-radius: 0.375rem; font-weight: 500; text-transform: capitalize; color: #4b5563; }
.tab.active { background: #2d2a73; color: #fff; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1.5rem; }
.card { background: #fff; border-radius: 0.75rem; overflow: hidden; box-shadow: 0 1px 2px 0 rgb(0 0 0 / 0.05); }
.card-media img, .card-media video { display: block; width: 100%; aspect-ratio: 1; object-fit: cover; }
.card-body { padding: 1rem; }
.card-actions { display: flex; align-items: center; gap: 1rem; margin-top: 0.5rem; }
.like { padding: 0.25rem 0.75rem; border: none; border-radius: 0.5rem; background: transparent; color: #4b5563; cursor: pointer; }
.like.liked { background: #fef2f2; color: #ef4444; }
.muted { color: #4b5563; }
.dark .muted, .dark .hero p, .dark .nav-link, .dark .tab:not(.active) { color: #9ca3af; }
.badge { display: inline-flex; padding: 0.25rem 0.5rem; font-size: 0.75rem; font-weight: 500; border-radius: 9999px; }
.badge.image { background: #dcfce7; color: #166534; }
.badge.video { background: #dbeafe; color: #1e40af; }
.panel, .stat { background: #fff; border-radius: 0.75rem; padding: 1.5rem; box-shadow: 0 1px 2px 0 rgb(0 0 0 / 0.05); }
.stack { display: flex; flex-direction: column; gap: 1rem; }
.narrow { max-width: 28rem; margin: 0 auto; }
.alert { padding: 0.75rem; margin-bottom: 1rem; border-radius: 0.5rem; background: #fef2f2; color: #dc2626; }
.notice { padding: 0.75rem; margin-bottom: 1rem; border-radius: 0.5rem; background: #f0fdf4; color: #15803d; }
.dropzone { display: flex; flex-direction: column; align-items: center; gap: 1rem; padding: 3rem; border: 2px dashed #d1d5db; border-radius: 0.75rem; text-align: center; }
.table { width: 100%; text-align: left; border-collapse: collapse; }
.table th, .table td { padding: 0.75rem 1.5rem; }
.stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr)); gap: 1.5rem; }
.stat-value { font-size: 1.5rem; font-weight: 700; }
.detail { display: grid; grid-template-columns: 2fr 1fr; gap: 1.5rem; }
.detail-media { background: #000; border-radius: 0.75rem; overflow: hidden; }
.detail-media img, .detail-media video { display: block; width: 100%; }
.comments { display: flex; flex-direction: column; gap: 0.5rem; font-size: 0.875rem; list-style: none; }
.empty { text-align: center; color: #4b5563; }
input, textarea { padding: 0.5rem 0.75rem; border: 1px solid #d1d5db; border-radius: 0.5rem; background: #fff; }
"#;

fn main() {
    // Only rebuild CSS when template or CSS files change
    println!("cargo:rerun-if-changed=assets/css/input.css");
    println!("cargo:rerun-if-changed=templates/");
    println!("cargo:rerun-if-changed=tailwind.config.js");

    let status = Command::new("tailwindcss")
        .args([
            "-i",
            "assets/css/input.css",
            "-o",
            "assets/css/output.css",
            "--minify",
        ])
        .status();

    match status {
        Ok(s) if s.success() => {
            println!("cargo:warning=Tailwind CSS compiled successfully");
        }
        _ => {
            println!("cargo:warning=Tailwind CLI not found, using fallback CSS");
            std::fs::create_dir_all("assets/css").ok();
            std::fs::write("assets/css/output.css", FALLBACK_CSS).ok();
        }
    }
}
