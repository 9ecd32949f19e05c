//! Board Card Component
//!
//! A single draggable card tile. Plain clicks open the card detail,
//! the edit trigger opens an edit form anchored over the tile.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::{
    BadgeDisplay, CardLabel, CardMember, DueDateBadge, EditCardModal, Icon, Link,
};
use crate::composition::{tile_class, CardComposition};
use crate::interaction::{classify_click, AnchorRect, ClickOutcome, EditState, TileClick};
use crate::models::{Board, Card};
use crate::navigation::Navigator;

/// A card tile on the board
///
/// # Arguments
/// * `navigator` - Used to open the card detail on a plain click
/// * `board` - Label and member lookups; without it neither is shown
/// * `on_drag_start` - Receives the tile's `dragstart` event as is
/// * `on_save` - Receives the card after an edit or member removal
#[component]
pub fn BoardCard(
    card: Card,
    navigator: Navigator,
    #[prop(optional)] board: Option<Arc<Board>>,
    #[prop(optional)] editable: bool,
    #[prop(optional, into)] ghosted: Signal<bool>,
    #[prop(optional, into)] being_dragged: Signal<bool>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional)] on_drag_start: Option<Callback<web_sys::DragEvent>>,
    #[prop(optional)] on_save: Option<Callback<Card>>,
) -> impl IntoView {
    let (edit_state, set_edit_state) = signal(EditState::default());
    let tile_ref = NodeRef::<leptos::html::Div>::new();

    let id = card.id;
    let board_id = card.board_id;
    let composition = CardComposition::resolve(&card, board.as_deref());

    let begin_edit = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let Some(tile) = tile_ref.get_untracked() else {
            return;
        };
        let rect = AnchorRect::from_dom_rect(&tile.get_bounding_client_rect());
        web_sys::console::log_1(&format!("[Card] Editing card {} at {:?}", id, rect).into());
        set_edit_state.update(|state| state.begin(rect));
    };

    let close_edit = move || {
        if edit_state.get_untracked().is_editing() {
            web_sys::console::log_1(&format!("[Card] Closed editor for card {}", id).into());
        }
        set_edit_state.update(EditState::close);
    };

    let on_tile_click = move |ev: web_sys::MouseEvent| {
        match classify_click(&TileClick::from_event(&ev), board_id, id) {
            ClickOutcome::Navigate(path) => {
                ev.prevent_default();
                navigator.redirect_to(&path);
            }
            ClickOutcome::InteractiveChild | ClickOutcome::NewContext => {}
        }
    };

    let edit_modal = {
        let card = card.clone();
        move || {
            edit_state.get().anchor().map(|rect| {
                view! {
                    <EditCardModal
                        card=card.clone()
                        rect=rect
                        on_cancel=Callback::new(move |_: ()| close_edit())
                        on_save=Callback::new(move |saved: Card| {
                            close_edit();
                            if let Some(on_save) = on_save {
                                on_save.run(saved);
                            }
                        })
                    />
                }
            })
        }
    };

    let labels = composition.labels.iter().map(|label| {
        view! {
            <div class="card-tile-label">
                <CardLabel color=label.color.clone() text="" checked=false />
            </div>
        }
    }).collect_view();

    let members = board.clone().map(|board| {
        composition.members.iter().map(|user| {
            view! {
                <CardMember
                    board=board.clone()
                    card=card.clone()
                    user=user.clone()
                    on_save=on_save
                />
            }
        }).collect_view()
    });

    let due_badge = composition.has_due_badge().then(|| {
        view! { <DueDateBadge card=card.clone() shown_on=BadgeDisplay::Front /> }
    });

    let archived_footer = composition.archived.then(|| {
        view! {
            <div class="card-tile-archived">
                <Icon kind="archive" />
                " Archived"
            </div>
        }
    });

    let edit_button = editable.then(|| {
        view! {
            <Link class="card-tile-edit-button" title="Edit card" on_click=Callback::new(begin_edit)>
                <Icon kind="pencil" size=0 />
            </Link>
        }
    });

    view! {
        <div
            node_ref=tile_ref
            class=move || tile_class(ghosted.get(), being_dragged.get())
            style=style
        >
            {edit_modal}
            <div
                class="card-tile-box"
                data-card-id=card.id.to_string()
                data-list-id=card.list_id.to_string()
                data-order=card.order.to_string()
                draggable="true"
                on:click=on_tile_click
                on:dragstart=move |ev: web_sys::DragEvent| {
                    if let Some(on_drag_start) = on_drag_start {
                        on_drag_start.run(ev);
                    }
                }
            >
                <div class="card-tile-labels">{labels}</div>
                <pre>{card.content.clone()}</pre>
                <div class="card-tile-bottom">
                    {due_badge}
                    <div class="card-tile-members">{members}</div>
                </div>
                {archived_footer}
            </div>
            <div class="card-tile-controls">{edit_button}</div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use gloo_timers::future::TimeoutFuture;
    use leptos::mount::mount_to;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    use crate::models::{Label, User};
    use crate::navigation::Route;

    wasm_bindgen_test_configure!(run_in_browser);

    fn card() -> Card {
        Card {
            id: 7,
            board_id: 3,
            list_id: 1,
            order: 0,
            content: "Write release notes".into(),
            due_date: None,
            archived: false,
            label_ids: vec![1],
            user_ids: vec![10],
        }
    }

    fn board() -> Arc<Board> {
        Arc::new(Board {
            id: 3,
            name: "Launch".into(),
            labels: vec![Label { id: 1, color: "#e74c3c".into(), text: "bug".into() }],
            users: vec![User { id: 10, name: "Ada Lovelace".into(), email: None, avatar_url: None }],
            cards: vec![card()],
            ..Default::default()
        })
    }

    /// Navigator parked on the board page
    fn board_navigator() -> Navigator {
        let navigator = Navigator::browser();
        navigator.redirect_to("/boards/3");
        navigator
    }

    fn container() -> web_sys::HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap().dyn_into::<web_sys::HtmlElement>().unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    /// Let scheduled render effects run
    async fn tick() {
        TimeoutFuture::new(0).await;
    }

    fn find(root: &web_sys::HtmlElement, selector: &str) -> web_sys::Element {
        root.query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("nothing matches {}", selector))
    }

    fn count(root: &web_sys::HtmlElement, selector: &str) -> u32 {
        root.query_selector_all(selector).unwrap().length()
    }

    fn mouse(kind: &str, ctrl: bool) -> web_sys::MouseEvent {
        let init = web_sys::MouseEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        init.set_ctrl_key(ctrl);
        web_sys::MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap()
    }

    /// Dispatch and report whether the default action survived
    fn dispatch(el: &web_sys::Element, ev: &web_sys::MouseEvent) -> bool {
        el.dispatch_event(ev).unwrap()
    }

    fn history_length() -> u32 {
        web_sys::window().unwrap().history().unwrap().length().unwrap()
    }

    fn classes(el: &web_sys::Element) -> Vec<String> {
        el.get_attribute("class")
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    #[wasm_bindgen_test]
    async fn edit_trigger_only_when_editable() {
        let navigator = board_navigator();
        let root = container();
        let handle = mount_to(root.clone(), move || view! {
            <div class="read-only"><BoardCard card=card() navigator=navigator /></div>
            <div class="editable"><BoardCard card=card() navigator=navigator editable=true /></div>
        });
        tick().await;

        assert_eq!(count(&root, ".read-only .card-tile-edit-button"), 0);
        assert_eq!(count(&root, ".editable .card-tile-edit-button"), 1);

        drop(handle);
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn plain_click_navigates_once() {
        let navigator = board_navigator();
        let root = container();
        let handle = mount_to(root.clone(), move || view! {
            <BoardCard card=card() navigator=navigator board=board() />
        });
        tick().await;

        let before = history_length();
        assert!(!dispatch(&find(&root, ".card-tile-box pre"), &mouse("click", false)));
        assert_eq!(navigator.route(), Route::Card { board_id: 3, card_id: 7 });
        assert_eq!(history_length(), before + 1);

        drop(handle);
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn modifier_and_member_clicks_stay_put() {
        let navigator = board_navigator();
        let root = container();
        let handle = mount_to(root.clone(), move || view! {
            <BoardCard card=card() navigator=navigator board=board() />
        });
        tick().await;

        let before = history_length();

        // Left to the browser for a new tab
        assert!(dispatch(&find(&root, ".card-tile-box"), &mouse("click", true)));
        assert_eq!(navigator.route(), Route::Board { board_id: 3 });

        let avatar = find(&root, "[data-interactive=member-avatar] .card-member-avatar");
        assert!(dispatch(&avatar, &mouse("click", false)));
        assert_eq!(navigator.route(), Route::Board { board_id: 3 });
        assert_eq!(history_length(), before);

        // The avatar's own handler still ran
        tick().await;
        assert_eq!(count(&root, ".card-member-popover"), 1);

        drop(handle);
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn edit_trigger_opens_anchored_modal_and_shroud_closes_it() {
        let navigator = board_navigator();
        let parent_clicks = RwSignal::new(0u32);
        let root = container();
        let handle = mount_to(root.clone(), move || view! {
            <div on:click=move |_| parent_clicks.update(|n| *n += 1)>
                <BoardCard card=card() navigator=navigator editable=true />
            </div>
        });
        tick().await;

        let expected = AnchorRect::from_dom_rect(&find(&root, ".card-tile").get_bounding_client_rect());
        let before = history_length();

        assert!(!dispatch(&find(&root, ".card-tile-edit-button"), &mouse("click", false)));
        tick().await;

        assert_eq!(parent_clicks.get_untracked(), 0);
        assert_eq!(navigator.route(), Route::Board { board_id: 3 });
        assert_eq!(history_length(), before);
        let window = find(&root, ".edit-card-modal-window");
        assert_eq!(window.get_attribute("style"), Some(expected.window_style()));
        assert_eq!(count(&root, ".edit-card-modal-window textarea"), 1);

        dispatch(&find(&root, ".edit-card-modal-shroud"), &mouse("click", false));
        tick().await;

        assert_eq!(count(&root, ".edit-card-modal"), 0);
        assert_eq!(navigator.route(), Route::Board { board_id: 3 });

        drop(handle);
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn shroud_swallows_mousedown_and_cancels_on_click() {
        let cancelled = RwSignal::new(0u32);
        let saved = RwSignal::new(0u32);
        let rect = AnchorRect { top: 40.0, left: 12.0, width: 256.0 };
        let root = container();
        let handle = mount_to(root.clone(), move || view! {
            <EditCardModal
                card=card()
                rect=rect
                on_cancel=Callback::new(move |_: ()| cancelled.update(|n| *n += 1))
                on_save=Callback::new(move |_: Card| saved.update(|n| *n += 1))
            />
        });
        tick().await;

        let shroud = find(&root, ".edit-card-modal-shroud");
        assert!(!dispatch(&shroud, &mouse("mousedown", false)));
        assert_eq!(cancelled.get_untracked(), 0);

        dispatch(&shroud, &mouse("click", false));
        assert_eq!(cancelled.get_untracked(), 1);
        assert_eq!(saved.get_untracked(), 0);
        assert_eq!(
            find(&root, ".edit-card-modal-window").get_attribute("style"),
            Some("position: fixed; top: 40px; left: 12px; width: 256px;".to_string())
        );

        drop(handle);
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn due_date_renders_one_front_badge() {
        let navigator = board_navigator();
        let due = Card { due_date: NaiveDate::from_ymd_opt(2026, 10, 24), ..card() };
        let root = container();
        let handle = mount_to(root.clone(), move || view! {
            <div class="with-due"><BoardCard card=due navigator=navigator /></div>
            <div class="without-due"><BoardCard card=card() navigator=navigator /></div>
        });
        tick().await;

        assert_eq!(count(&root, ".with-due .due-date-badge-front"), 1);
        assert_eq!(count(&root, ".without-due .due-date-badge"), 0);

        drop(handle);
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn drag_flags_set_tile_classes() {
        let navigator = board_navigator();
        let dragging = RwSignal::new(false);
        let root = container();
        let handle = mount_to(root.clone(), move || view! {
            <div class="source"><BoardCard card=card() navigator=navigator being_dragged=dragging /></div>
            <div class="ghost"><BoardCard card=card() navigator=navigator board=board() ghosted=true /></div>
        });
        tick().await;

        let source = find(&root, ".source .card-tile");
        assert!(!classes(&source).contains(&"card-tile-dragging".to_string()));

        dragging.set(true);
        tick().await;
        assert!(classes(&source).contains(&"card-tile-dragging".to_string()));

        let ghost = find(&root, ".ghost .card-tile");
        assert!(classes(&ghost).contains(&"card-tile-ghosted".to_string()));
        // A ghost with the board keeps labels and members
        assert_eq!(count(&root, ".ghost .card-tile-label"), 1);
        assert_eq!(count(&root, ".ghost .card-member"), 1);

        drop(handle);
        root.remove();
    }
}
