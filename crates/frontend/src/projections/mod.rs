pub mod p900_product_sales;
pub mod p901_shop_sales;
pub mod p902_region_orders;
pub mod p903_hourly_orders;
