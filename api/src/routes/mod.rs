pub mod ask;
pub mod upload_data_route;
