//! Slider read model and notification payloads

use pageslide_core::Notification;
use serde::Serialize;

/// Snapshot of a slider's state
///
/// Recomputed on every scroll update. Serializes without the slide element
/// handle, which is only meaningful to the host that produced it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderData<E> {
    /// Pixels the slide row is shifted to the left
    pub left_indent: f64,
    /// The slide at `current_index`, `None` when out of range
    #[serde(skip)]
    pub current_slide: Option<E>,
    /// Index of the nearest slide
    pub current_index: isize,
    /// Number of slides
    pub nb_slides: usize,
    /// Distance to the nearest slide in half viewport widths (0..=1)
    pub distance_to_next_slide: f64,
}

impl<E> SliderData<E> {
    /// Initial state for `nb_slides` slides
    pub fn new(nb_slides: usize) -> Self {
        Self {
            left_indent: 0.0,
            current_slide: None,
            current_index: 0,
            nb_slides,
            distance_to_next_slide: 0.0,
        }
    }

    /// Whether `current_index` is the first slide
    pub fn is_first(&self) -> bool {
        self.current_index <= 0
    }

    /// Whether `current_index` is the last slide
    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.nb_slides as isize
    }
}

/// Notification kinds a slider fires
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SliderEventKind {
    /// The nearest slide changed
    SlideChanged,
    /// State was recomputed
    Updated,
}

/// Notification payload
#[derive(Clone, Debug, PartialEq)]
pub enum SliderEvent<E> {
    /// The nearest slide changed
    SlideChanged {
        /// Index before the change, `None` on the first computation
        previous: Option<isize>,
        /// New nearest index
        current: isize,
        /// The new current slide, `None` when out of range
        slide: Option<E>,
    },
    /// State was recomputed
    Updated(SliderData<E>),
}

impl<E> SliderEvent<E> {
    /// State snapshot carried by an `Updated` notification
    pub fn data(&self) -> Option<&SliderData<E>> {
        match self {
            SliderEvent::Updated(data) => Some(data),
            SliderEvent::SlideChanged { .. } => None,
        }
    }
}

impl<E> Notification for SliderEvent<E> {
    type Kind = SliderEventKind;

    fn kind(&self) -> SliderEventKind {
        match self {
            SliderEvent::SlideChanged { .. } => SliderEventKind::SlideChanged,
            SliderEvent::Updated(_) => SliderEventKind::Updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_skips_element() {
        let data = SliderData {
            left_indent: 1250.0,
            current_slide: Some("opaque handle"),
            current_index: 1,
            nb_slides: 5,
            distance_to_next_slide: 0.5,
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "leftIndent": 1250.0,
                "currentIndex": 1,
                "nbSlides": 5,
                "distanceToNextSlide": 0.5,
            })
        );
    }

    #[test]
    fn test_bounds() {
        let mut data = SliderData::<()>::new(3);
        assert!(data.is_first());
        assert!(!data.is_last());
        data.current_index = 2;
        assert!(data.is_last());
    }

    #[test]
    fn test_event_kind() {
        let updated = SliderEvent::<()>::Updated(SliderData::new(2));
        assert_eq!(updated.kind(), SliderEventKind::Updated);
        assert!(updated.data().is_some());

        let changed = SliderEvent::<()>::SlideChanged {
            previous: None,
            current: 0,
            slide: None,
        };
        assert_eq!(changed.kind(), SliderEventKind::SlideChanged);
        assert!(changed.data().is_none());
    }
}
