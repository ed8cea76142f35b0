#![feature(test)]
extern crate html2outline;
extern crate test;

use ::test::Bencher;

use html2outline::{config, from_read};

fn make_html(content: &str) -> String {
    String::from("<html><body>") + content + "</body></html>"
}

// A list of `items` entries, all identical so the outline collapses them.
fn make_list(item: &str, items: usize) -> String {
    let mut result = String::from("<ul class=\"menu\">");
    for _ in 0..items {
        result.push_str("<li class=\"entry\"><a href=\"/page\">");
        result.push_str(item);
        result.push_str("</a></li>");
    }
    result.push_str("</ul>");
    result
}

fn make_nested(content: &str, depth: usize) -> String {
    let mut t = String::from(content);
    for i in 0..depth {
        t = format!("<div class=\"c{}\" data-depth=\"{}\">{}</div>", i % 10, i, t);
    }
    t
}

#[bench]
fn bench_empty(b: &mut Bencher) {
    b.iter(|| from_read(make_html("").as_bytes()));
}
#[bench]
fn bench_list_10(b: &mut Bencher) {
    let html = make_html(&make_list("item", 10));
    b.iter(|| from_read(html.as_bytes()));
}
#[bench]
fn bench_list_1000(b: &mut Bencher) {
    let html = make_html(&make_list("item", 1000));
    b.iter(|| from_read(html.as_bytes()));
}
#[cfg(unix)]
#[bench]
fn bench_list_1000_coloured(b: &mut Bencher) {
    let html = make_html(&make_list("item", 1000));
    b.iter(|| config::ansi().string_from_read(html.as_bytes()));
}
#[bench]
fn bench_nested_depth_50(b: &mut Bencher) {
    let html = make_html(&make_nested("leaf", 50));
    b.iter(|| config::plain().indent_size(1).string_from_read(html.as_bytes()));
}
