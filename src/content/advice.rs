// SPDX-License-Identifier: MPL-2.0
//! Safety red flags, care rules, and troubleshooting entries.

/// Symptoms that mean: take the lenses out now and talk to a professional.
/// Always shown in full, in this order.
pub const SAFETY_RED_FLAGS: &[&str] = &[
    "Sharp or worsening eye pain",
    "Redness that does not fade after removing the lens",
    "Blurred vision that does not clear with blinking",
    "Unusual light sensitivity or heavy tearing",
    "Discharge, or a feeling of something stuck that removal does not fix",
];

/// Everyday care rules shown in Care mode.
pub const CARE_RULES: &[&str] = &[
    "Wash and dry your hands before touching lenses, every time.",
    "Use only fresh contact-lens solution — never water or saliva.",
    "Do not sleep in lenses unless your prescriber explicitly approved it.",
    "Stick to the wearing and replacement schedule you were given.",
    "Take lenses out before showering, swimming or hot tubs.",
    "Keep a pair of glasses handy so sore eyes can get a rest day.",
];

/// One collapsible troubleshooting entry: a short question and its answer.
#[derive(Debug, Clone, Copy)]
pub struct TroubleshootingEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// The four quick-pick troubleshooting entries shown under procedure steps.
pub const TROUBLESHOOTING: &[TroubleshootingEntry] = &[
    TroubleshootingEntry {
        question: "My eye keeps closing",
        answer: "Hold both eyelids firmly near the lash lines, and only touch the lens on \
                 lightly. The steadier the lids, the weaker the blink reflex.",
    },
    TroubleshootingEntry {
        question: "I think the lens is inside out",
        answer: "Check the profile on your fingertip: a clean cup shape is correct. If the \
                 edges flare outward like a saucer, flip it and rinse before trying again.",
    },
    TroubleshootingEntry {
        question: "I'm too scared to touch my eye",
        answer: "Practise with one eye, one or two short tries a day. Getting used to a light \
                 fingertip touch near the eye comes first — the lens comes later.",
    },
    TroubleshootingEntry {
        question: "It still feels like something is in my eye",
        answer: "Take the lens out (wash your hands first), check for damage, debris or an \
                 inside-out lens, rinse with solution and retry. If the feeling persists, stop \
                 for the day.",
    },
];
