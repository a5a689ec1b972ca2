//! The ordered, read-only set of gesture templates known to an estimator,
//! populated once at start-up.

use crate::error::{Error, Result};
use crate::gesture::curl::FingerCurl;
use crate::gesture::direction::FingerDirection;
use crate::gesture::template::{GestureTemplate, GestureTemplateBuilder};
use crate::hand::Finger;

/// Ordered set of registered gesture templates. Registration order is
/// preserved and reflected in estimation results.
#[derive(Debug, Clone, Default)]
pub struct GestureRegistry {
    templates: Vec<GestureTemplate>,
}

impl GestureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The eight canonical gestures: victory, thumbs_up, open_palm,
    /// closed_fist, point_up, ok_sign, rock_on, call_me.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for template in builtin_templates() {
            registry
                .register(template)
                .expect("builtin gesture names are unique");
        }
        registry
    }

    /// Register a template. Names are unique; a duplicate is rejected
    /// rather than silently replacing the earlier template.
    pub fn register(&mut self, template: GestureTemplate) -> Result<()> {
        if self.get(template.name()).is_some() {
            return Err(Error::DuplicateTemplate {
                name: template.name().to_owned(),
            });
        }
        self.templates.push(template);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&GestureTemplate> {
        self.templates.iter().find(|t| t.name() == name)
    }

    pub fn templates(&self) -> &[GestureTemplate] {
        &self.templates
    }

    /// All registered gesture names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

// criteria shorthands for the builtin table
fn no_curl(b: GestureTemplateBuilder, fingers: &[Finger]) -> GestureTemplateBuilder {
    fingers
        .iter()
        .fold(b, |b, &f| b.curl(f, FingerCurl::NoCurl, 1.0))
}

fn full_curl(b: GestureTemplateBuilder, fingers: &[Finger]) -> GestureTemplateBuilder {
    fingers
        .iter()
        .fold(b, |b, &f| b.curl(f, FingerCurl::FullCurl, 1.0))
}

fn up(b: GestureTemplateBuilder, fingers: &[Finger]) -> GestureTemplateBuilder {
    fingers
        .iter()
        .fold(b, |b, &f| b.direction(f, FingerDirection::VerticalUp, 1.0))
}

fn builtin_templates() -> Vec<GestureTemplate> {
    use Finger::*;

    let victory = up(
        full_curl(
            no_curl(GestureTemplate::builder("victory"), &[Index, Middle]),
            &[Ring, Pinky],
        ),
        &[Index, Middle],
    )
    .curl(Thumb, FingerCurl::HalfCurl, 0.5);

    let thumbs_up = up(
        full_curl(
            GestureTemplate::builder("thumbs_up"),
            &[Index, Middle, Ring, Pinky],
        )
        .curl(Thumb, FingerCurl::NoCurl, 1.0),
        &[Thumb],
    );

    let open_palm = up(
        no_curl(GestureTemplate::builder("open_palm"), &Finger::ALL),
        &Finger::ALL,
    );

    let closed_fist = full_curl(GestureTemplate::builder("closed_fist"), &Finger::ALL);

    let point_up = up(
        full_curl(GestureTemplate::builder("point_up"), &[Middle, Ring, Pinky])
            .curl(Index, FingerCurl::NoCurl, 1.0)
            .curl(Thumb, FingerCurl::HalfCurl, 0.8),
        &[Index],
    );

    let ok_sign = up(
        no_curl(
            GestureTemplate::builder("ok_sign")
                .curl(Index, FingerCurl::HalfCurl, 1.0)
                .curl(Thumb, FingerCurl::HalfCurl, 1.0),
            &[Middle, Ring, Pinky],
        ),
        &[Middle, Ring, Pinky],
    );

    let rock_on = up(
        full_curl(
            no_curl(GestureTemplate::builder("rock_on"), &[Index, Pinky]),
            &[Middle, Ring],
        ),
        &[Index, Pinky],
    )
    .curl(Thumb, FingerCurl::HalfCurl, 0.5);

    let call_me = full_curl(
        no_curl(GestureTemplate::builder("call_me"), &[Thumb, Pinky]),
        &[Index, Middle, Ring],
    )
    .direction(Thumb, FingerDirection::DiagonalUpLeft, 1.0)
    .direction(Pinky, FingerDirection::HorizontalRight, 1.0);

    [
        victory, thumbs_up, open_palm, closed_fist, point_up, ok_sign, rock_on, call_me,
    ]
    .into_iter()
    .map(|b| b.build().expect("builtin templates have criteria"))
    .collect()
}
