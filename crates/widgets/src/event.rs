use dom::Id;

/// Pointer event delivered to the widget layer by the host environment.
///
/// Targets are DOM node ids; events addressed to nodes the widget layer
/// does not know are silently ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEvent {
    Click { target: Id },
    PointerEnter { target: Id },
    PointerLeave { target: Id },
}
