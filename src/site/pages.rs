//! Page templates module
//!
//! The four HTML documents this site serves. Each renderer is a pure
//! function of the site metadata; nothing here touches request state.

use crate::config::SiteConfig;

/// Shared footer with the deployment address
fn footer(site: &SiteConfig) -> String {
    format!(
        r#"<footer>
        <p>Powered by Rust + Tokio + Hyper | Static IP: {ip}</p>
    </footer>"#,
        ip = site.public_ip
    )
}

/// Social links block (GitHub / LinkedIn)
fn social_links(site: &SiteConfig) -> String {
    format!(
        r#"<div class="social-links">
        <p><strong>GitHub:</strong> <a href="{github_url}" target="_blank">{github_handle}</a></p>
        <p><strong>LinkedIn:</strong> <a href="{linkedin_url}" target="_blank">{name}</a></p>
    </div>"#,
        github_url = site.github_url,
        github_handle = site.github_handle,
        linkedin_url = site.linkedin_url,
        name = site.owner.name
    )
}

/// Home page
pub fn render_home(site: &SiteConfig) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{name} - {position}</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <nav>
        <a href="/home">Home</a>
        <a href="/about">About</a>
        <a href="/contact">Contact</a>
        <a href="/static/sample.pdf">Sample PDF</a>
    </nav>
    <h1>Welcome to {name}'s Portfolio</h1>
    <p>{position} at {company}</p>
    <img src="/static/logo.png" alt="Logo" width="200">
    {social}
    {footer}
</body>
</html>"#,
        name = site.owner.name,
        position = site.owner.position,
        company = site.owner.company,
        social = social_links(site),
        footer = footer(site)
    )
}

/// About page
pub fn render_about(site: &SiteConfig) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>About {name}</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <nav>
        <a href="/home">Home</a>
        <a href="/about">About</a>
        <a href="/contact">Contact</a>
    </nav>
    <h1>About {name}</h1>
    <p>{position} at {company} with expertise in cloud infrastructure and web technologies.</p>
    <p>This website serves as a portfolio and a small demonstration site.</p>
    <h2>Technical Skills</h2>
    <ul>
        <li>Cloud Computing (AWS, GCP)</li>
        <li>Python Development</li>
        <li>Web Services</li>
        <li>Data Science</li>
    </ul>
    {footer}
</body>
</html>"#,
        name = site.owner.name,
        position = site.owner.position,
        company = site.owner.company,
        footer = footer(site)
    )
}

/// Contact page
pub fn render_contact(site: &SiteConfig) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Contact {name}</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <nav>
        <a href="/home">Home</a>
        <a href="/about">About</a>
        <a href="/contact">Contact</a>
    </nav>
    <h1>Contact Information</h1>
    <div class="contact-info">
        <p><strong>Name:</strong> {name}</p>
        <p><strong>Email:</strong> <a href="mailto:{email}">{email}</a></p>
        <p><strong>Phone:</strong> {phone}</p>
        <p><strong>Company:</strong> {company}</p>
        <p><strong>Position:</strong> {position}</p>
    </div>
    {social}
    {footer}
</body>
</html>"#,
        name = site.owner.name,
        email = site.owner.email,
        phone = site.owner.phone,
        company = site.owner.company,
        position = site.owner.position,
        social = social_links(site),
        footer = footer(site)
    )
}

/// Not-found page
pub fn render_not_found(site: &SiteConfig) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Page Not Found</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <nav>
        <a href="/home">Home</a>
        <a href="/about">About</a>
        <a href="/contact">Contact</a>
    </nav>
    <h1>404 - Page Not Found</h1>
    <p>The requested URL was not found on this server.</p>
    <p><a href="/home">Return to the home page</a></p>
    {footer}
</body>
</html>"#,
        footer = footer(site)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn site() -> SiteConfig {
        Config::load_from("nonexistent-config-for-tests")
            .unwrap()
            .site
    }

    #[test]
    fn test_home_content() {
        let html = render_home(&site());
        assert!(html.contains(r#"<a href="/home">Home</a>"#));
        assert!(html.contains(r#"<a href="/about">About</a>"#));
        assert!(html.contains(r#"<a href="/contact">Contact</a>"#));
        assert!(html.contains(r#"<a href="/static/sample.pdf">Sample PDF</a>"#));
        assert!(html.contains(r#"<link rel="stylesheet" href="/static/style.css">"#));
        assert!(html.contains(r#"<img src="/static/logo.png""#));
        assert!(html.contains("Welcome to Nilay Biswas's Portfolio"));
        assert!(html.contains("Cloud Engineer at Quantzent Pvt Ltd"));
        assert!(html.contains("https://github.com/nilaycodetodecode"));
        assert!(html.contains("https://www.linkedin.com/in/nilay-biswas-7aba07316"));
        assert!(html.contains("Static IP: 18.168.21.214"));
    }

    #[test]
    fn test_about_content() {
        let html = render_about(&site());
        assert!(html.contains("About Nilay Biswas"));
        assert!(html.contains("Technical Skills"));
        assert!(html.contains("Cloud Computing (AWS, GCP)"));
        assert!(html.contains("Static IP: 18.168.21.214"));
    }

    #[test]
    fn test_contact_content() {
        let html = render_contact(&site());
        assert!(html.contains("Contact Information"));
        assert!(html.contains(r#"mailto:nilaybiswas.datascience.2021@gmail.com"#));
        assert!(html.contains("+91 8391859206"));
        assert!(html.contains("Quantzent Pvt Ltd"));
        assert!(html.contains("Cloud Engineer"));
    }

    #[test]
    fn test_not_found_content() {
        let html = render_not_found(&site());
        assert!(html.contains("404 - Page Not Found"));
        assert!(html.contains(r#"<a href="/home">Return to the home page</a>"#));
        assert!(html.contains("Static IP: 18.168.21.214"));
    }

    #[test]
    fn test_renderers_are_deterministic() {
        let s = site();
        assert_eq!(render_home(&s), render_home(&s));
        assert_eq!(render_contact(&s), render_contact(&s));
    }
}
