use std::fs;
use std::path::Path;

use brutal_ssg::Project;

const POSTS_JSON: &str = r#"{
  "site": {"name": "AmpereHour"},
  "categories": ["Credit Cards", "Banking"],
  "posts": [
    {
      "slug": "best-travel-cards",
      "title": "Best Travel Cards",
      "excerpt": "Points & perks",
      "date": "2024-01-05",
      "category": "Credit Cards",
      "thumbnail": "https://picsum.photos/1200/750",
      "bodyHtml": "<p>Start <strong>here</strong>.</p>",
      "author": {"name": "Ann", "bio": "Card nerd", "linkedin": "https://linkedin.com/in/ann"},
      "faqs": [{"q": "Annual fee?", "a": "Usually."}],
      "sources": [{"label": "CFPB", "url": "https://consumerfinance.gov"}]
    },
    {
      "slug": "cashback-basics",
      "title": "Cashback Basics",
      "date": "2023-11-02",
      "category": "Credit Cards"
    },
    {
      "slug": "high-yield-savings",
      "title": "High-Yield Savings",
      "date": "2023-12-12",
      "category": "Banking"
    }
  ]
}"#;

const FOOTER: &str = r#"<footer>
  <a class="icon-link" href="https://linkedin.com/company/x" aria-label="LinkedIn">
    <svg class="icon" viewBox="0 0 24 24" aria-hidden="true"><rect x="1" y="1"/></svg>
  </a>
</footer>"#;

fn setup(root: &Path, posts_json: &str) {
    fs::create_dir_all(root.join("assets/data")).unwrap();
    fs::create_dir_all(root.join("assets/partials")).unwrap();
    fs::write(root.join("assets/data/posts.json"), posts_json).unwrap();
    fs::write(root.join("assets/partials/footer.html"), FOOTER).unwrap();
}

fn read(root: &Path, file: &str) -> String {
    fs::read_to_string(root.join(file)).unwrap()
}

#[test]
fn full_run_writes_expected_files() {
    let dir = tempfile::tempdir().unwrap();
    setup(dir.path(), POSTS_JSON);

    let project = Project::new(dir.path(), "https://amperehour.com/").unwrap();
    let report = project.generate().unwrap();

    assert_eq!(report.posts, 3);
    assert_eq!(report.skeletons_created, 2);
    assert_eq!(report.sitemap_urls, 4 + 2 + 3);

    let post = read(dir.path(), "posts/best-travel-cards.html");
    assert!(post.contains(
        r#"<link rel="canonical" href="https://amperehour.com/posts/best-travel-cards.html">"#
    ));
    assert!(post.contains("<title>Best Travel Cards | AmpereHour</title>"));
    assert!(post.contains(r#"<rect x="1" y="1"/>"#));
    assert!(post.contains("<p>Start <strong>here</strong>.</p>"));
    assert!(post.contains(r#"href="/posts/cashback-basics.html""#));
    assert!(!post.contains(r#"href="/posts/high-yield-savings.html""#));

    let sitemap = read(dir.path(), "sitemap.xml");
    assert_eq!(sitemap.matches("<url>").count(), 9);
    assert!(sitemap.contains("<loc>https://amperehour.com/categories/credit-cards.html</loc>"));

    assert_eq!(
        read(dir.path(), "robots.txt"),
        "User-agent: *\nAllow: /\n\nSitemap: https://amperehour.com/sitemap.xml\n"
    );
}

#[test]
fn regeneration_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    setup(dir.path(), POSTS_JSON);
    let project = Project::new(dir.path(), "https://amperehour.com").unwrap();

    project.generate().unwrap();
    let files = [
        "posts/best-travel-cards.html",
        "posts/cashback-basics.html",
        "posts/high-yield-savings.html",
        "sitemap.xml",
        "robots.txt",
    ];
    let first: Vec<String> = files.iter().map(|f| read(dir.path(), f)).collect();

    project.generate().unwrap();
    let second: Vec<String> = files.iter().map(|f| read(dir.path(), f)).collect();

    assert_eq!(first, second);
}

#[test]
fn skeleton_survives_label_change() {
    let dir = tempfile::tempdir().unwrap();
    setup(dir.path(), POSTS_JSON);
    let project = Project::new(dir.path(), "https://amperehour.com").unwrap();
    project.generate().unwrap();

    let before = read(dir.path(), "categories/banking.html");
    assert!(before.contains(r#"<h1 id="categoryTitle">Banking</h1>"#));

    // Same slug, different label
    let renamed = POSTS_JSON.replace("\"Banking\"", "\"banking \"");
    fs::write(dir.path().join("assets/data/posts.json"), renamed).unwrap();

    let report = project.generate().unwrap();
    assert_eq!(report.skeletons_created, 0);
    assert_eq!(read(dir.path(), "categories/banking.html"), before);
}

#[test]
fn missing_footer_uses_fallback_icon() {
    let dir = tempfile::tempdir().unwrap();
    setup(dir.path(), POSTS_JSON);
    fs::remove_file(dir.path().join("assets/partials/footer.html")).unwrap();

    let project = Project::new(dir.path(), "https://amperehour.com").unwrap();
    project.generate().unwrap();

    let post = read(dir.path(), "posts/cashback-basics.html");
    assert!(post.contains(brutal_ssg::render::FALLBACK_ICON));
}

#[test]
fn missing_content_source_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let project = Project::new(dir.path(), "https://amperehour.com").unwrap();
    let err = project.generate().unwrap_err();
    assert!(format!("{:#}", err).contains("Content source not found"));
    assert!(!dir.path().join("sitemap.xml").exists());
}

#[test]
fn malformed_content_source_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    setup(dir.path(), "{ \"posts\": [");
    let project = Project::new(dir.path(), "https://amperehour.com").unwrap();
    assert!(project.generate().is_err());
    assert!(!dir.path().join("posts").exists());
}

#[test]
fn config_file_overrides_settings() {
    let dir = tempfile::tempdir().unwrap();
    setup(dir.path(), POSTS_JSON);
    fs::write(
        dir.path().join("_config.yml"),
        "fallback_description: \"Plain money talk.\"\npreconnect: ~\n",
    )
    .unwrap();

    let project = Project::new(dir.path(), "https://amperehour.com").unwrap();
    project.generate().unwrap();

    let post = read(dir.path(), "posts/cashback-basics.html");
    assert!(post.contains(r#"<meta name="description" content="Plain money talk.">"#));
    assert!(!post.contains("preconnect"));
}
