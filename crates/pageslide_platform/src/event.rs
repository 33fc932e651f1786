//! Environment notifications and scroll commands

/// Notifications a slider asks its host to deliver
///
/// The host translates these into whatever its environment offers (window
/// listeners in a browser, explicit calls in a headless document) and forwards
/// them to the slider's `on_scroll` / `on_resize` entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostEvent {
    /// The document scroll position changed
    Scroll,
    /// The viewport was resized
    Resize,
}

impl HostEvent {
    /// All notification kinds, in a stable order
    pub const ALL: [HostEvent; 2] = [HostEvent::Scroll, HostEvent::Resize];

    /// The DOM event name for this notification
    pub fn dom_name(self) -> &'static str {
        match self {
            HostEvent::Scroll => "scroll",
            HostEvent::Resize => "resize",
        }
    }
}

/// How a programmatic scroll should reach its target
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump straight to the target
    Instant,
    /// Animate towards the target
    #[default]
    Smooth,
}

impl ScrollBehavior {
    /// The CSSOM `behavior` keyword
    pub fn as_str(self) -> &'static str {
        match self {
            ScrollBehavior::Instant => "instant",
            ScrollBehavior::Smooth => "smooth",
        }
    }
}
