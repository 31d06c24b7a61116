use super::View;

/// Landing view served at the root path.
#[derive(Debug)]
pub struct Home;

pub static HOME: Home = Home;

impl View for Home {
    fn name(&self) -> &'static str {
        "Home"
    }

    fn render(&self) -> String {
        concat!(
            "<section class=\"home\">",
            "<h1>Home</h1>",
            "<nav><a href=\"/Counter\">Counter</a></nav>",
            "</section>"
        )
        .to_string()
    }
}
