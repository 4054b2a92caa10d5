#[derive(Debug)]
pub struct ReviewCreateRequest {
    pub name: String,
    pub message: String,
    pub rating: i32,
    pub image_path: Option<String>,
}
