use super::View;

/// Counter view with increment and decrement controls.
///
/// The count itself lives client-side; the fragment only carries the markup
/// the client script binds to.
#[derive(Debug)]
pub struct Counter;

pub static COUNTER: Counter = Counter;

impl View for Counter {
    fn name(&self) -> &'static str {
        "Counter"
    }

    fn render(&self) -> String {
        concat!(
            "<section class=\"counter\">",
            "<h1>Counter</h1>",
            "<button data-action=\"decrement\">-</button>",
            "<span data-count>0</span>",
            "<button data-action=\"increment\">+</button>",
            "<nav><a href=\"/\">Home</a></nav>",
            "</section>"
        )
        .to_string()
    }
}
