//! Pure rendering of coin lists into panels, and of panels into markup or text.

use std::fmt;

use shared::CoinRecord;

pub const NO_FAVORITES: &str = "No favorites";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Add,
    Remove,
}

impl CardAction {
    pub fn label(self) -> &'static str {
        match self {
            CardAction::Add => "Add",
            CardAction::Remove => "Remove",
        }
    }

    /// CSS class and `data-action` value of the card button.
    pub fn class(self) -> &'static str {
        match self {
            CardAction::Add => "add",
            CardAction::Remove => "remove",
        }
    }

    pub fn from_class(class: &str) -> Option<Self> {
        match class {
            "add" => Some(CardAction::Add),
            "remove" => Some(CardAction::Remove),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub price_label: String,
    pub action: CardAction,
}

impl Card {
    fn from_coin(coin: &CoinRecord, action: CardAction) -> Self {
        Card {
            id: coin.id.clone(),
            name: coin.name.clone(),
            price_label: format_price(coin.price),
            action,
        }
    }

    pub fn to_html(&self) -> String {
        let id = escape_html(&self.id);
        format!(
            r#"<div class="card" data-id="{id}"><h3>{name}</h3><p class="p">{price}</p><button class="{class}" data-action="{class}" data-id="{id}">{label}</button></div>"#,
            id = id,
            name = escape_html(&self.name),
            price = escape_html(&self.price_label),
            class = self.action.class(),
            label = self.action.label(),
        )
    }
}

/// Contents of one display region.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Panel {
    pub cards: Vec<Card>,
    pub empty_message: Option<&'static str>,
    pub error: Option<String>,
}

impl Panel {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn to_html(&self) -> String {
        if let Some(error) = &self.error {
            return format!(r#"<p class="error">{}</p>"#, escape_html(error));
        }
        if self.cards.is_empty() {
            return self
                .empty_message
                .map(|message| format!("<p>{}</p>", escape_html(message)))
                .unwrap_or_default();
        }
        self.cards.iter().map(Card::to_html).collect()
    }
}

// Terminal rendering: one numbered line per card
impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = &self.error {
            return writeln!(f, "  ! {}", error);
        }
        if self.cards.is_empty() {
            if let Some(message) = self.empty_message {
                writeln!(f, "  {}", message)?;
            }
            return Ok(());
        }
        for (i, card) in self.cards.iter().enumerate() {
            writeln!(
                f,
                "  {:>2}. {:<24} {:>16}  [{}]",
                i + 1,
                card.name,
                card.price_label,
                card.id
            )?;
        }
        Ok(())
    }
}

pub fn render_results(coins: &[CoinRecord]) -> Panel {
    Panel {
        cards: coins.iter().map(|c| Card::from_coin(c, CardAction::Add)).collect(),
        empty_message: None,
        error: None,
    }
}

pub fn render_favorites(coins: &[CoinRecord]) -> Panel {
    Panel {
        cards: coins.iter().map(|c| Card::from_coin(c, CardAction::Remove)).collect(),
        empty_message: Some(NO_FAVORITES),
        error: None,
    }
}

pub fn render_search_error(message: &str) -> Panel {
    Panel {
        cards: Vec::new(),
        empty_message: None,
        error: Some(format!("Search failed: {}", message)),
    }
}

pub fn format_price(price: f64) -> String {
    format!("${}", price)
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
