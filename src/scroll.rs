use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Smooth,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    pub fn origin() -> Self {
        Self {
            top: 0.0,
            behavior: ScrollBehavior::Smooth,
        }
    }
}

pub trait Viewport {
    fn scroll_to(&self, request: ScrollRequest);
}

/// Asks the viewport to glide back to the top. Already being at the top is
/// the viewport's concern; the request is issued regardless.
pub fn scroll_to_origin(viewport: &impl Viewport) -> ScrollRequest {
    let request = ScrollRequest::origin();
    viewport.scroll_to(request);
    request
}
