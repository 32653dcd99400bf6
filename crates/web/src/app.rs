// Browser page: binds the DOM regions to one Watchlist controller

use std::cell::RefCell;
use std::rc::Rc;

use log::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlInputElement, KeyboardEvent};

use watchlist::{MarketClient, SearchTrigger, WatchConfig, Watchlist};

use crate::commands::CardCommand;
use crate::local_storage::BrowserStore;
use crate::{FAVORITES_ID, RESULTS_ID, SEARCH_BUTTON_ID, SEARCH_INPUT_ID};

struct Page {
    watchlist: RefCell<Watchlist<BrowserStore>>,
    client: MarketClient,
    input: HtmlInputElement,
    results: Element,
    favorites: Element,
}

impl Page {
    fn paint_results(&self) {
        let html = self.watchlist.borrow().results_panel().to_html();
        self.results.set_inner_html(&html);
    }

    fn paint_favorites(&self) {
        let html = self.watchlist.borrow().favorites_panel().to_html();
        self.favorites.set_inner_html(&html);
    }
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = WatchConfig::default();
    match shared::console_level(&config.log_level) {
        Some(level) => wasm_logger::init(wasm_logger::Config::new(level)),
        None => log::set_max_level(log::LevelFilter::Off),
    }
    for warning in &config.warnings {
        log::warn!("{}", warning);
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let input: HtmlInputElement = element(&document, SEARCH_INPUT_ID)?.dyn_into()?;
    let button = element(&document, SEARCH_BUTTON_ID)?;
    let client = MarketClient::new(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let page = Rc::new(Page {
        watchlist: RefCell::new(Watchlist::new(BrowserStore::open())),
        client,
        input,
        results: element(&document, RESULTS_ID)?,
        favorites: element(&document, FAVORITES_ID)?,
    });
    page.paint_favorites();

    {
        let page = page.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            search(&page, SearchTrigger::Button);
        });
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    {
        let handler_page = page.clone();
        let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            search(&handler_page, SearchTrigger::Key(event.key()));
        });
        page.input
            .add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
        on_key.forget();
    }

    // Card buttons are rebuilt on every paint, so listen on the regions
    for region in [page.results.clone(), page.favorites.clone()] {
        let page = page.clone();
        let on_card = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            card_clicked(&page, event);
        });
        region.add_event_listener_with_callback("click", on_card.as_ref().unchecked_ref())?;
        on_card.forget();
    }

    info!("Coin watch page ready");
    Ok(())
}

fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{}", id)))
}

fn search(page: &Rc<Page>, trigger: SearchTrigger) {
    let query = page.input.value();
    let ticket = match page.watchlist.borrow_mut().start_search(&trigger, &query) {
        Some(ticket) => ticket,
        None => return,
    };

    let page = page.clone();
    spawn_local(async move {
        let outcome = page.client.fetch_markets().await;
        let applied = page.watchlist.borrow_mut().finish_search(&ticket, outcome);
        if applied {
            page.paint_results();
        }
    });
}

fn card_clicked(page: &Page, event: Event) {
    let target = match event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
        Some(target) => target,
        None => return,
    };
    let command = CardCommand::parse(
        target.get_attribute("data-action").as_deref(),
        target.get_attribute("data-id").as_deref(),
    );
    let command = match command {
        Some(command) => command,
        None => return,
    };

    let outcome = command.apply(&mut page.watchlist.borrow_mut());
    match outcome {
        Ok(true) => page.paint_favorites(),
        Ok(false) => {}
        Err(e) => error!("Favorites update failed: {}", e),
    }
}
