//! The catalog query.

/// Document type that holds product records.
pub const PRODUCT_TYPE: &str = "products";

/// Query for every product record, projecting exactly the fields the page
/// displays. `image` is flattened from the nested asset object down to its
/// reference token so the wire record stays one level deep.
pub fn product_catalog_query() -> String {
    format!(
        "*[_type == \"{PRODUCT_TYPE}\"]{{_id,_type,name,description,price,discountPercent,category,sizes,colors,isNew,\"image\": image.asset._ref,_createdAt,_updatedAt,_rev}}"
    )
}
