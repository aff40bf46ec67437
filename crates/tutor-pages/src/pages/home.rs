use tutor_reactive::{GraphError, LayoutNode, Page};

pub const PATH: &str = "/";
pub const NAME: &str = "Home";

pub fn page() -> Result<Page, GraphError> {
    Page::builder(PATH, NAME)
        .layout(LayoutNode::heading(
            "Welcome to this interactive math web application",
        ))
        .layout(LayoutNode::paragraph(
            "Please select an area of interest above to explore this math concept further",
        ))
        .build()
}
