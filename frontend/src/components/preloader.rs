//! Full-screen preloader with logo, progress bar and percentage readout.

use std::cell::RefCell;
use std::rc::Rc;

use folio::config::{OWNER_NAME, OWNER_ROLE};
use folio::preloader::{self, Preloader as Sequence, PreloaderEvent};
use leptos::*;
use web_sys::HtmlElement;

use crate::services::animator::{on_first_frame, FrameLoop};
use crate::services::dom;

/// Elements of each preloader target, looked up once.
fn bind_targets() -> Vec<(&'static str, Vec<HtmlElement>)> {
    let Some(root) = dom::element_by_id(preloader::OVERLAY) else {
        log::warn!("⚠️ Preloader overlay not found");
        return Vec::new();
    };
    [preloader::OVERLAY, preloader::LOGO, preloader::BAR]
        .into_iter()
        .map(|target| (target, dom::anim_targets(&root, target)))
        .collect()
}

#[component]
pub fn Preloader(
    /// Called once the exit animation has finished.
    #[prop(into)]
    on_complete: Callback<()>,
) -> impl IntoView {
    let (readout, set_readout) = create_signal("0%".to_string());
    let root = create_node_ref::<html::Div>();

    let sequence = Rc::new(RefCell::new(Sequence::new()));
    let ticker: Rc<RefCell<Option<FrameLoop>>> = Rc::default();

    {
        let sequence = sequence.clone();
        let ticker = ticker.clone();
        on_first_frame(root, move || {
            let targets = bind_targets();
            let step_sequence = sequence.clone();
            let frame_loop = FrameLoop::start(move |dt| {
                let (events, frames, text, running) = {
                    let mut seq = step_sequence.borrow_mut();
                    let events = seq.advance(dt);
                    (events, seq.frames(), seq.readout(), seq.is_running())
                };

                for frame in frames {
                    let element = targets
                        .iter()
                        .find(|(target, _)| *target == frame.target)
                        .and_then(|(_, elements)| elements.get(frame.index));
                    if let Some(element) = element {
                        dom::apply_frame(element, &frame.frame);
                    }
                }
                set_readout.set(text);

                // Last thing: the shell unmounts this component in response
                if events.contains(&PreloaderEvent::Completed) {
                    on_complete.call(());
                }
                running
            });
            *ticker.borrow_mut() = Some(frame_loop);
        });
    }

    on_cleanup(move || {
        sequence.borrow_mut().cancel();
        ticker.borrow_mut().take();
    });

    view! {
        <div id=preloader::OVERLAY data-anim=preloader::OVERLAY class="preloader" node_ref=root>
            <div class="preloader-inner">
                <div data-anim=preloader::LOGO class="preloader-logo" style="opacity: 0; transform: scale(0.8);">
                    <h1 class="text-glow">{OWNER_NAME}</h1>
                    <p class="preloader-role">{OWNER_ROLE}</p>
                </div>
                <div class="preloader-track">
                    <div data-anim=preloader::BAR class="preloader-bar" style="width: 0%;"></div>
                </div>
                <p class="preloader-readout">{move || readout.get()}</p>
            </div>
        </div>
    }
}
