use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PageTitle {
    pub url: String,
    pub title: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PageLinks {
    pub url: String,
    pub links: Vec<String>,
}
