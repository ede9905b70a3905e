// SPDX-License-Identifier: MPL-2.0
//! Step sequences for the insertion and removal procedures.

use super::{Step, StepKind};

pub const INSERTION_STEPS: &[Step] = &[
    Step {
        id: "wash-hands",
        kind: StepKind::Content,
        title: "Wash and dry your hands",
        why_it_matters: Some(
            "Most lens-related eye infections start with germs carried on fingers.",
        ),
        checklist: &[
            "Wash with soap for at least 20 seconds, including fingertips.",
            "Rinse all soap off — residue stings and clouds lenses.",
            "Dry with a lint-free towel so no fibres stick to the lens.",
        ],
        tips: &["Trim your nails first; short, smooth nails make everything easier."],
        warning: None,
    },
    Step {
        id: "inspect-lens",
        kind: StepKind::Content,
        title: "Check the lens",
        why_it_matters: Some(
            "An inside-out or damaged lens feels uncomfortable and will not sit properly.",
        ),
        checklist: &[
            "Place the lens on your fingertip and look at its profile.",
            "A correct lens forms a smooth cup; flared edges mean it is inside out.",
            "Look for tears, deposits or debris — discard a damaged lens.",
        ],
        tips: &[
            "Rinse with fresh solution, never with water.",
            "Always start with the same eye so you don't mix lenses up.",
        ],
        warning: None,
    },
    Step {
        id: "camera-align",
        kind: StepKind::CameraCapture,
        title: "Check your alignment with the camera",
        why_it_matters: Some(
            "Seeing your own eye steady in the frame helps you learn the right head and hand position.",
        ),
        checklist: &[
            "Turn the camera on and centre your eye in the guide.",
            "Hold the device steady, or prop it up at eye level.",
            "Take a snapshot if you want to compare your posture between tries.",
        ],
        tips: &["Bright, even lighting in front of you works better than overhead light."],
        warning: None,
    },
    Step {
        id: "hold-eyelids",
        kind: StepKind::Content,
        title: "Hold your eyelids open",
        why_it_matters: Some(
            "Blinking is a reflex; pinning both lash lines is what actually keeps the eye open.",
        ),
        checklist: &[
            "With your free hand, pull the upper lid up from near the lash line.",
            "Pull the lower lid down with the middle finger of the lens hand.",
            "Keep both eyes open and look straight ahead.",
        ],
        tips: &["Practise just holding your lids open a few times before adding the lens."],
        warning: None,
    },
    Step {
        id: "place-lens",
        kind: StepKind::Content,
        title: "Place the lens gently",
        why_it_matters: None,
        checklist: &[
            "Bring the lens straight toward the centre of your eye.",
            "Touch it on lightly — do not press or push.",
            "Look down slowly, release your lids, and close your eye for a moment.",
        ],
        tips: &["Looking slightly upward and placing the lens on the white of the eye also works."],
        warning: Some(
            "If you feel sharp pain, remove the lens immediately and check it before trying again.",
        ),
    },
    Step {
        id: "settle-check",
        kind: StepKind::Content,
        title: "Blink and check comfort",
        why_it_matters: Some("A well-placed lens should feel like almost nothing within a minute."),
        checklist: &[
            "Blink slowly several times to let the lens settle.",
            "Check that your vision is clear and stable.",
            "Mild awareness is normal at first; persistent grittiness is not.",
        ],
        tips: &[],
        warning: Some(
            "Persistent stinging, redness or blur means the lens should come out — rinse it and inspect before re-trying.",
        ),
    },
];

pub const REMOVAL_STEPS: &[Step] = &[
    Step {
        id: "wash-hands",
        kind: StepKind::Content,
        title: "Wash and dry your hands",
        why_it_matters: Some("Clean hands matter just as much coming out as going in."),
        checklist: &[
            "Wash with soap and dry with a lint-free towel.",
            "Have your case open and filled with fresh solution before you start.",
        ],
        tips: &[],
        warning: None,
    },
    Step {
        id: "slide-pinch",
        kind: StepKind::Content,
        title: "Slide down and pinch",
        why_it_matters: Some(
            "Sliding the lens off the cornea first makes the pinch painless and safe.",
        ),
        checklist: &[
            "Look up and pull your lower lid down.",
            "With a fingertip, slide the lens down onto the white of the eye.",
            "Pinch it gently between thumb and index finger pads and lift it away.",
        ],
        tips: &[
            "If the lens resists, blink a few times or add a rewetting drop and retry.",
            "Dry fingertips grip a wet lens better than wet ones.",
        ],
        warning: Some("Never use your nails to pinch — pads of the fingers only."),
    },
    Step {
        id: "aftercare",
        kind: StepKind::Content,
        title: "Clean and store (or discard)",
        why_it_matters: None,
        checklist: &[
            "Daily disposables go straight in the bin — never re-wear them.",
            "For reusable lenses: rub, rinse and store in fresh solution.",
            "Empty and air-dry the case every day; replace it regularly.",
        ],
        tips: &["Topping up old solution instead of replacing it is a common cause of infection."],
        warning: None,
    },
];
