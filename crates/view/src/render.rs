//! Server-side rendering of the product page.
//!
//! One entry point, [`render_page`], turns a page state into a complete
//! HTML document. All repository-controlled text passes through
//! [`crate::html::escape`] on the way into markup.

use std::fmt::Write as _;

use vitrine_catalog::{CartEntry, ImageUrlResolver, Product, format_price, truncate_description};

use crate::html::escape;
use crate::page::{Notice, ProductsPage};

/// Square pixel size requested for grid card images.
pub const GRID_IMAGE_SIZE: u32 = 300;

/// Square pixel size requested for cart thumbnails.
pub const CART_IMAGE_SIZE: u32 = 50;

/// Top-of-page heading.
pub const PAGE_HEADING: &str = "Products From API's Data";

/// Cart panel heading.
pub const CART_HEADING: &str = "Cart Summary";

/// Shown in place of the grid when nothing is displayed.
pub const EMPTY_CATALOG_TEXT: &str = "No products available";

/// Shown in place of cart entries while the cart is empty.
pub const EMPTY_CART_TEXT: &str = "Your Cart Is Empty Please Add Products";

const STYLESHEET: &str = "\
body{margin:0;font-family:system-ui,sans-serif;background:#fafafa;color:#111}\
main.page{max-width:72rem;margin:0 auto;padding:1.5rem}\
.notice{background:#e7f6e7;border:1px solid #79c879;border-radius:4px;padding:.75rem 1rem;margin-bottom:1rem}\
h1{font-size:1.6rem}\
.product-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(18rem,1fr));gap:1rem}\
.product-card{background:#fff;border:1px solid #ddd;border-radius:6px;padding:1rem;position:relative}\
.product-card img{display:block;max-width:100%;height:auto;border-radius:4px}\
.image-missing{width:100%;aspect-ratio:1;background:#eee;border-radius:4px}\
.badge-new{position:absolute;top:.75rem;right:.75rem;background:#0a7d33;color:#fff;font-size:.75rem;padding:.2rem .5rem;border-radius:3px}\
.category,.label{color:#555;font-size:.85rem;margin:.25rem 0}\
.description{font-size:.9rem}\
.swatches{display:flex;gap:.35rem;margin:.25rem 0}\
.swatch{width:1.1rem;height:1.1rem;border-radius:50%;border:1px solid #999;display:inline-block}\
.sizes{display:flex;gap:.35rem;flex-wrap:wrap;margin:.25rem 0}\
.size{border:1px solid #bbb;border-radius:3px;padding:.1rem .45rem;font-size:.8rem}\
.price{font-weight:600}\
.discount{color:#b3261e;font-size:.85rem}\
.product-card form{margin-top:.5rem}\
.product-card button{background:#1a56db;color:#fff;border:0;border-radius:4px;padding:.5rem .9rem;cursor:pointer}\
.cart-panel{margin-top:2rem;background:#fff;border:1px solid #ddd;border-radius:6px;padding:1rem}\
.cart-entries{list-style:none;margin:0;padding:0}\
.cart-entry{display:flex;justify-content:space-between;align-items:center;border-top:1px solid #eee;padding:.5rem 0}\
.cart-entry .name{margin:0}\
.cart-entry .price{margin:.15rem 0 0;color:#333}\
.cart-thumb-missing{width:50px;height:50px;background:#eee;border-radius:4px}\
.empty{color:#666}";

/// Render the full document for the given page state.
///
/// `notice` is the acknowledgment from the most recent cart add, if one is
/// waiting to be shown; it renders as a banner above the heading.
pub fn render_page(
    page: &ProductsPage,
    notice: Option<&Notice>,
    images: &dyn ImageUrlResolver,
) -> String {
    let mut out =
        String::with_capacity(2048 + page.products().len() * 1024 + page.cart().len() * 256);

    out.push_str("<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    out.push_str("<title>Products</title><style>");
    out.push_str(STYLESHEET);
    out.push_str("</style></head><body>");

    let _ = write!(out, "<main class=\"page\" data-phase=\"{}\">", page.phase().as_str());

    if let Some(notice) = notice {
        let _ = write!(
            out,
            "<div class=\"notice\" role=\"status\">{}</div>",
            escape(notice.message())
        );
    }

    let _ = write!(out, "<h1>{PAGE_HEADING}</h1>");

    push_grid(&mut out, page.products(), images);
    push_cart(&mut out, page.cart().entries(), images);

    out.push_str("</main></body></html>");
    out
}

fn push_grid(out: &mut String, products: &[Product], images: &dyn ImageUrlResolver) {
    out.push_str("<section class=\"product-grid\">");
    if products.is_empty() {
        let _ = write!(out, "<p class=\"empty\">{EMPTY_CATALOG_TEXT}</p>");
    } else {
        for product in products {
            push_card(out, product, images);
        }
    }
    out.push_str("</section>");
}

fn push_card(out: &mut String, product: &Product, images: &dyn ImageUrlResolver) {
    let _ = write!(
        out,
        "<article class=\"product-card\" data-product-id=\"{}\">",
        escape(product.id.as_str())
    );

    match images.resolve(&product.image, GRID_IMAGE_SIZE, GRID_IMAGE_SIZE) {
        Some(url) => {
            let _ = write!(
                out,
                "<img src=\"{}\" alt=\"{}\" width=\"{GRID_IMAGE_SIZE}\" height=\"{GRID_IMAGE_SIZE}\">",
                escape(&url),
                escape(&product.name)
            );
        }
        None => out.push_str("<div class=\"image-missing\"></div>"),
    }

    if product.is_new {
        out.push_str("<span class=\"badge-new\">New</span>");
    }

    let _ = write!(out, "<h2>{}</h2>", escape(&product.name));
    let _ = write!(
        out,
        "<p class=\"category\">Category: {}</p>",
        escape(&product.category)
    );
    let _ = write!(
        out,
        "<p class=\"description\">{}</p>",
        escape(&truncate_description(&product.description))
    );

    out.push_str("<p class=\"label\">Available Colors:</p><div class=\"swatches\">");
    for color in &product.colors {
        // Color names double as CSS tokens, lower-cased the way the source
        // data expects ("Navy" -> navy). Unknown tokens render as an
        // unstyled swatch, which is cosmetic only.
        let _ = write!(
            out,
            "<span class=\"swatch\" style=\"background-color: {}\" title=\"{}\"></span>",
            escape(&color.to_lowercase()),
            escape(color)
        );
    }
    out.push_str("</div>");

    out.push_str("<p class=\"label\">Sizes:</p><div class=\"sizes\">");
    for size in &product.sizes {
        let _ = write!(out, "<span class=\"size\">{}</span>", escape(size));
    }
    out.push_str("</div>");

    let _ = write!(out, "<p class=\"price\">${}</p>", product.price);
    if product.has_discount() {
        let _ = write!(out, "<p class=\"discount\">{}% OFF</p>", product.discount_percent);
    }

    let _ = write!(
        out,
        "<form method=\"post\" action=\"/cart/add\">\
         <input type=\"hidden\" name=\"product_id\" value=\"{}\">\
         <button type=\"submit\">Add to Cart</button></form>",
        escape(product.id.as_str())
    );

    out.push_str("</article>");
}

fn push_cart(out: &mut String, entries: &[CartEntry], images: &dyn ImageUrlResolver) {
    out.push_str("<section class=\"cart-panel\">");
    let _ = write!(out, "<h2>{CART_HEADING}</h2>");

    if entries.is_empty() {
        let _ = write!(out, "<p class=\"empty\">{EMPTY_CART_TEXT}</p>");
    } else {
        out.push_str("<ul class=\"cart-entries\">");
        for entry in entries {
            out.push_str("<li class=\"cart-entry\"><div class=\"cart-entry-info\">");
            let _ = write!(out, "<p class=\"name\">{}</p>", escape(&entry.name));
            let _ = write!(out, "<p class=\"price\">${}</p>", format_price(entry.price));
            out.push_str("</div>");

            match images.resolve(&entry.image, CART_IMAGE_SIZE, CART_IMAGE_SIZE) {
                Some(url) => {
                    let _ = write!(
                        out,
                        "<img src=\"{}\" alt=\"{}\" width=\"{CART_IMAGE_SIZE}\" height=\"{CART_IMAGE_SIZE}\">",
                        escape(&url),
                        escape(&entry.name)
                    );
                }
                None => out.push_str("<div class=\"cart-thumb-missing\"></div>"),
            }
            out.push_str("</li>");
        }
        out.push_str("</ul>");
    }

    out.push_str("</section>");
}
