//! End-to-end slot scenarios: decorated containers mounted into a tree.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use spark_signals::signal;
use spark_slots::*;

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
    reset_registry();
}

/// Context seen by the container on its last render.
type Captured = Rc<RefCell<SlotContext>>;

/// `<layout>` with header, content and footer regions.
fn layout(captured: Option<Captured>) -> Slottable<Option<Node>> {
    with_slots(
        move |children: Option<Node>| {
            if let Some(captured) = &captured {
                *captured.borrow_mut() = use_slot_context();
            }
            let slots = use_slots(["header", "content", "footer"]);
            let header = slots["Header"].clone();
            let content = slots["Content"].clone();
            let footer = slots["Footer"].clone();

            element(ElementProps {
                tag: "layout".into(),
                children: Some(Node::new(move || {
                    region("header", &header, text_node("default header"));
                    region("main", &content, Fallback::none());
                    region("footer", &footer, text_node("default footer"));
                    if let Some(children) = &children {
                        children.render();
                    }
                })),
                ..Default::default()
            })
        },
        ["header", "content", "footer"],
    )
}

fn region(tag: &str, reader: &SlotReader, fallback: impl Into<Fallback>) {
    let reader = reader.clone();
    let fallback = fallback.into();
    let _cleanup = element(ElementProps {
        tag: tag.into(),
        children: Some(Node::new(move || {
            let _cleanup = reader.render(fallback.clone());
        })),
        ..Default::default()
    });
}

#[derive(Clone, PartialEq)]
struct Counter {
    count: i32,
}

struct CounterProps {
    count: i32,
    children: Option<Node>,
}

/// `<value>` rendering its slot with `Counter` render-site props.
fn counter() -> Slottable<CounterProps> {
    with_slots(
        |props: CounterProps| {
            let slots = use_slots(["value"]);
            let value = slots["Value"].clone();
            let site = Counter { count: props.count };
            let children = props.children;

            element(ElementProps {
                tag: "value".into(),
                children: Some(Node::new(move || {
                    let _cleanup = value.render_with(PropValue::Static(site.clone()), text_node("none"));
                    if let Some(children) = &children {
                        children.render();
                    }
                })),
                ..Default::default()
            })
        },
        ["value"],
    )
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_layout_fills_content_keeps_defaults() {
    setup();

    let layout = layout(None);
    let content = layout["Content"].clone();
    let handle = mount(move || {
        layout.render(Some(Node::new(move || {
            let _cleanup = content.render(text_node("hello"));
        })))
    });

    assert_eq!(
        handle.render(),
        "<layout><header>default header</header><main>hello</main><footer>default footer</footer></layout>"
    );
}

#[test]
fn test_nothing_written_renders_defaults() {
    setup();

    let layout = layout(None);
    let handle = mount(move || layout.render(None));

    assert_eq!(handle.text(), vec!["default header", "default footer"]);
}

#[test]
fn test_all_slots_filled_in_any_order() {
    setup();

    let layout = layout(None);
    let writers = layout.clone();
    let handle = mount(move || {
        layout.render(Some(Node::new(move || {
            let _cleanup = writers["Footer"].render(text_node("bye"));
            let _cleanup = writers["Header"].render(text_node("hi"));
            let _cleanup = writers["Content"].render(text_node("body"));
        })))
    });

    assert_eq!(handle.text(), vec!["hi", "body", "bye"]);
}

#[test]
fn test_outlet_nested_deep_in_children() {
    setup();

    let layout = layout(None);
    let content = layout["Content"].clone();
    let handle = mount(move || {
        layout.render(Some(Node::new(move || {
            let content = content.clone();
            let _cleanup = element(ElementProps {
                tag: "wrapper".into(),
                children: Some(Node::new(move || {
                    let _cleanup = content.render(text_node("deep"));
                })),
                ..Default::default()
            });
        })))
    });

    assert_eq!(handle.text(), vec!["default header", "deep", "default footer"]);
}

#[test]
fn test_render_prop_receives_site_props() {
    setup();

    let counter = counter();
    let value = counter["Value"].clone();
    let handle = mount(move || {
        counter.render(CounterProps {
            count: 5,
            children: Some(Node::new(move || {
                let _cleanup = value.render(SlotContent::render(|p: &Counter| {
                    Some(text_node((p.count * 2).to_string()))
                }));
            })),
        })
    });

    assert_eq!(handle.render(), "<value>10</value>");
}

#[test]
fn test_render_prop_without_writer_uses_fallback() {
    setup();

    let counter = counter();
    let handle = mount(move || {
        counter.render(CounterProps {
            count: 5,
            children: None,
        })
    });

    assert_eq!(handle.render(), "<value>none</value>");
}

#[test]
fn test_signal_content_updates_reader() {
    setup();

    let content = signal(SlotContent::from(text_node("first")));
    let content_clone = content.clone();

    let layout = layout(None);
    let writer = layout["Content"].clone();
    let handle = mount(move || {
        layout.render(Some(Node::new(move || {
            let _cleanup = writer.render(content_clone.clone());
        })))
    });
    assert_eq!(handle.text(), vec!["default header", "first", "default footer"]);

    content.set(SlotContent::from(text_node("second")));
    assert_eq!(handle.text(), vec!["default header", "second", "default footer"]);

    content.set(SlotContent::Empty);
    assert_eq!(handle.text(), vec!["default header", "default footer"]);
}

#[test]
fn test_reactive_text_inside_slot_content() {
    setup();

    let label = signal(String::from("draft"));
    let label_clone = label.clone();

    let layout = layout(None);
    let writer = layout["Header"].clone();
    let handle = mount(move || {
        let label = label_clone.clone();
        layout.render(Some(Node::new(move || {
            let _cleanup = writer.render(text_node(label.clone()));
        })))
    });
    assert_eq!(handle.text()[0], "draft");

    label.set(String::from("final"));
    assert_eq!(handle.text()[0], "final");
}

#[test]
fn test_sibling_instances_are_isolated() {
    setup();

    let layout = layout(None);
    let first = layout["Content"].clone();
    let second = layout["Footer"].clone();
    let handle = mount(move || {
        let a = layout.render(Some(Node::new(move || {
            let _cleanup = first.render(text_node("a content"));
        })));
        let b = layout.render(Some(Node::new(move || {
            let _cleanup = second.render(text_node("b footer"));
        })));
        Box::new(move || {
            a();
            b();
        }) as Cleanup
    });

    assert_eq!(
        handle.text(),
        vec![
            "default header",
            "a content",
            "default footer",
            "default header",
            "b footer",
        ]
    );
}

#[test]
fn test_generic_slot_accessor() {
    setup();

    let layout = layout(None);
    let writer = layout.clone();
    let handle = mount(move || {
        layout.render(Some(Node::new(move || {
            let _cleanup = writer.slot("footer", text_node("generic"));
            let _cleanup = writer.slot("not-declared", text_node("lost"));
        })))
    });

    assert_eq!(handle.text(), vec!["default header", "generic"]);
}

#[test]
fn test_has_slot_reflects_writes() {
    setup();

    let captured: Captured = Rc::default();
    let layout = layout(Some(captured.clone()));
    let writer = layout["Content"].clone();
    let _handle = mount(move || {
        layout.render(Some(Node::new(move || {
            let _cleanup = writer.render(SlotContent::Empty);
        })))
    });

    let context = captured.borrow();
    assert!(context.is_scoped());
    assert!(context.has_slot("content"));
    assert!(!context.has_slot("header"));
    assert_eq!(context.slots().len(), 1);
}

#[test]
fn test_redundant_write_skipped() {
    setup();

    let node = text_node("same");
    let content = signal(SlotContent::from(node.clone()));
    let content_clone = content.clone();

    let captured: Captured = Rc::default();
    let layout = layout(Some(captured.clone()));
    let writer = layout["Content"].clone();
    let _handle = mount(move || {
        layout.render(Some(Node::new(move || {
            let _cleanup = writer.render(content_clone.clone());
        })))
    });

    let registry = captured.borrow().registry().cloned().unwrap();
    let before = registry.revision();

    content.set(SlotContent::from(node));
    assert_eq!(registry.revision(), before);
}

#[test]
fn test_bare_outlet_without_scope() {
    setup();

    let handle = mount(|| {
        slot_outlet(SlotOutletProps {
            name: "header".into(),
            content: text_node("orphan").into(),
        })
    });

    assert!(handle.text().is_empty());
    assert_eq!(handle.render(), "");
}

#[test]
fn test_readers_settle_once_and_stay_settled() {
    setup();

    let reader: Rc<RefCell<Option<SlotReader>>> = Rc::default();
    let reader_clone = reader.clone();
    let settled_during_render = Rc::new(Cell::new(true));
    let settled_clone = settled_during_render.clone();

    let base = with_slots(
        move |_: ()| {
            let slots = use_slots(["content"]);
            settled_clone.set(slots["Content"].is_settled());
            *reader_clone.borrow_mut() = Some(slots["Content"].clone());
            slots["Content"].render(text_node("default"))
        },
        ["content"],
    );
    let handle = mount(move || base.render(()));

    assert!(!settled_during_render.get());
    let reader = reader.borrow().clone().unwrap();
    assert!(reader.is_settled());
    assert_eq!(handle.text(), vec!["default"]);
}

#[test]
fn test_show_teardown_discards_registry() {
    setup();

    let visible = signal(true);
    let visible_clone = visible.clone();
    let renders = Rc::new(Cell::new(0));
    let captured: Captured = Rc::default();
    let registry: Rc<RefCell<Weak<SlotRegistry>>> = Rc::default();

    let layout = layout(Some(captured.clone()));
    let writer = layout["Content"].clone();
    let handle = mount(move || {
        show(
            move || visible_clone.get(),
            move || {
                renders.set(renders.get() + 1);
                // Only the first instance writes content
                let first = renders.get() == 1;
                let writer = writer.clone();
                layout.render(Some(Node::new(move || {
                    if first {
                        let _cleanup = writer.render(text_node("hello"));
                    }
                })))
            },
            None::<fn() -> Cleanup>,
        )
    });
    assert_eq!(handle.text(), vec!["default header", "hello", "default footer"]);
    *registry.borrow_mut() = captured
        .borrow()
        .registry()
        .map(Rc::downgrade)
        .unwrap_or_default();

    visible.set(false);
    assert!(handle.text().is_empty());
    assert_eq!(get_allocated_count(), 1);

    visible.set(true);
    assert_eq!(handle.text(), vec!["default header", "default footer"]);
    let fresh = captured.borrow().registry().cloned().unwrap();
    assert!(!fresh.has("content"));
    let old = registry.borrow().upgrade();
    assert!(old.is_none_or(|old| !Rc::ptr_eq(&old, &fresh)));
}

#[test]
fn test_unmount_releases_everything() {
    setup();

    let layout = layout(None);
    let content = layout["Content"].clone();
    let handle = mount(move || {
        layout.render(Some(Node::new(move || {
            let _cleanup = content.render(text_node("hello"));
        })))
    });
    assert!(get_allocated_count() > 1);

    handle.unmount();
    assert_eq!(get_allocated_count(), 0);
}

#[test]
fn test_try_with_slots_reports_bad_names() {
    let result = try_with_slots(|_: ()| Box::new(|| {}) as Cleanup, ["header", ""]);
    assert_eq!(result.err(), Some(SlotError::EmptyName(1)));
}

#[test]
fn test_thread_exit_with_tree_still_mounted() {
    let worker = std::thread::spawn(|| {
        setup();

        let layout = layout(None);
        let content = layout["Content"].clone();
        let cleanup = layout.render(Some(Node::new(move || {
            let _cleanup = content.render(text_node("hello"));
        })));
        assert_eq!(collect_text(0), vec!["default header", "hello", "default footer"]);

        // Dropped without running: the thread exits with every node still allocated
        drop(cleanup);
    });

    assert!(worker.join().is_ok());
}
