//! End-to-end tests for rule composition
//!
//! Covers the generator form flow: platform pre-fill, manual edits,
//! re-selection, and the rendered llms.txt contract.

use core_ttx::composer::{GeneratorConfig, GeneratorSession, Platform, compose};
use indoc::indoc;

#[test]
fn composes_allow_before_disallow_under_single_header() {
    let config = GeneratorConfig::builder()
        .product_paths("/products/*, /collections/*".to_string())
        .disallow_paths("/cart,/checkout".to_string())
        .build();

    let composed = compose(&config);

    let expected = indoc! {"
        User-agent: *
        Allow: /products/*
        Allow: /collections/*
        Disallow: /cart
        Disallow: /checkout
    "};
    assert_eq!(composed.text, expected);
    assert!(composed.warnings.is_empty());
}

#[test]
fn feed_url_is_appended_after_the_directive_block() {
    let mut session = GeneratorSession::new();
    session.select_platform(Platform::Shopify);
    session.set_product_feed_url("https://shop.example.com/feed.xml");

    let composed = session.preview();

    let expected = indoc! {"
        User-agent: *
        Allow: /products/*
        Allow: /collections/*
        Disallow: /cart
        Disallow: /checkout
        Disallow: /account

        # Product feed: https://shop.example.com/feed.xml
    "};
    assert_eq!(composed.text, expected);
}

#[test]
fn manual_edits_win_over_platform_reselect() {
    let mut session = GeneratorSession::new();
    session.select_platform(Platform::Shopify);
    session.set_disallow_paths("/cart, /checkout, /admin");
    session.select_platform(Platform::Shopify);

    let composed = session.preview();

    assert!(composed.text.contains("Disallow: /admin\n"));
    assert!(!composed.text.contains("Disallow: /account\n"));
}

#[test]
fn empty_session_still_previews_the_header() {
    let composed = GeneratorSession::new().preview();
    assert_eq!(composed.text, "User-agent: *\n");
}

#[test]
fn ambiguous_wildcards_warn_without_blocking_output() {
    let mut session = GeneratorSession::new();
    session.set_product_paths("/products/*, /cat*/items");

    let composed = session.preview();

    assert_eq!(composed.warnings.len(), 1);
    assert!(composed.text.contains("Allow: /cat*/items\n"));
    assert!(composed.text.contains("Allow: /products/*\n"));
}

#[test]
fn every_platform_preset_previews_cleanly() {
    for platform in [
        Platform::Shopify,
        Platform::WooCommerce,
        Platform::BigCommerce,
        Platform::Magento,
    ] {
        let mut session = GeneratorSession::new();
        session.select_platform(platform);

        let composed = session.preview();
        assert!(composed.text.starts_with("User-agent: *\n"), "{}", platform);
        assert!(composed.warnings.is_empty(), "{}", platform);
        assert!(composed.text.lines().any(|line| line.starts_with("Allow: ")), "{}", platform);
        assert!(
            composed.text.lines().any(|line| line.starts_with("Disallow: ")),
            "{}",
            platform
        );
    }
}
