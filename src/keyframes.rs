//! Fixed 24-hour keyframe tables for the sky gradient and star tint.
//!
//! Both tables are ordered by ascending hour, start at 0.0 and end at 24.0,
//! and the 24.0 entry repeats the 0.0 colors so the daily cycle loops
//! seamlessly. Each gradient entry is a five-stop vertical strip from zenith
//! (index 0) down to the horizon (index 4).

pub struct GradientKeyframe {
    pub hour: f32,
    pub label: &'static str,
    pub colors: [&'static str; 5],
}

pub struct StarKeyframe {
    pub hour: f32,
    pub color: &'static str,
}

pub const GRADIENT_KEYFRAMES: &[GradientKeyframe] = &[
    GradientKeyframe {
        hour: 0.0,
        label: "Night",
        colors: ["#01000C", "#030114", "#060220", "#0C0830", "#181040"],
    },
    GradientKeyframe {
        hour: 4.5,
        label: "Dawn",
        colors: ["#040218", "#0A0428", "#1C0C44", "#48286C", "#904858"],
    },
    GradientKeyframe {
        hour: 6.5,
        label: "Morning",
        colors: ["#06051C", "#283C7C", "#5070A4", "#E09058", "#F0B870"],
    },
    GradientKeyframe {
        hour: 10.0,
        label: "Mid-morning",
        colors: ["#1438A0", "#2858B8", "#4880CC", "#90B0DC", "#C8CCC8"],
    },
    GradientKeyframe {
        hour: 13.0,
        label: "Daylight",
        colors: ["#1848A8", "#2C70CC", "#5898DC", "#A8C8E4", "#DED4C0"],
    },
    GradientKeyframe {
        hour: 17.5,
        label: "Golden Hour",
        colors: ["#2C4890", "#6058A0", "#A06890", "#E08858", "#F8A848"],
    },
    GradientKeyframe {
        hour: 19.0,
        label: "Dusk",
        colors: ["#100C38", "#241860", "#502878", "#904070", "#C06050"],
    },
    GradientKeyframe {
        hour: 21.0,
        label: "Twilight",
        colors: ["#05021A", "#0A0530", "#180C44", "#281850", "#302050"],
    },
    GradientKeyframe {
        hour: 24.0,
        label: "Night",
        colors: ["#01000C", "#030114", "#060220", "#0C0830", "#181040"],
    },
];

pub const STAR_KEYFRAMES: &[StarKeyframe] = &[
    StarKeyframe { hour: 0.0, color: "#FFFFFF" },
    StarKeyframe { hour: 4.5, color: "#F8D8A8" },
    StarKeyframe { hour: 6.5, color: "#E88840" },
    StarKeyframe { hour: 10.0, color: "#C0D8F0" },
    StarKeyframe { hour: 13.0, color: "#B8D4F8" },
    StarKeyframe { hour: 17.5, color: "#F8C078" },
    StarKeyframe { hour: 19.0, color: "#F0A868" },
    StarKeyframe { hour: 21.0, color: "#E8E0D0" },
    StarKeyframe { hour: 24.0, color: "#FFFFFF" },
];

#[cfg(test)]
mod tests {
    use super::{GRADIENT_KEYFRAMES, STAR_KEYFRAMES};

    #[test]
    fn gradient_table_spans_a_full_day() {
        assert_eq!(GRADIENT_KEYFRAMES.len(), 9);
        assert_eq!(GRADIENT_KEYFRAMES[0].hour, 0.0);
        assert_eq!(GRADIENT_KEYFRAMES.last().unwrap().hour, 24.0);
        for pair in GRADIENT_KEYFRAMES.windows(2) {
            assert!(pair[0].hour < pair[1].hour);
        }
    }

    #[test]
    fn star_table_spans_a_full_day() {
        assert_eq!(STAR_KEYFRAMES.len(), 9);
        assert_eq!(STAR_KEYFRAMES[0].hour, 0.0);
        assert_eq!(STAR_KEYFRAMES.last().unwrap().hour, 24.0);
        for pair in STAR_KEYFRAMES.windows(2) {
            assert!(pair[0].hour < pair[1].hour);
        }
    }

    #[test]
    fn midnight_entries_match_for_seamless_wrap() {
        let first = GRADIENT_KEYFRAMES.first().unwrap();
        let last = GRADIENT_KEYFRAMES.last().unwrap();
        assert_eq!(first.colors, last.colors);
        assert_eq!(
            STAR_KEYFRAMES.first().unwrap().color,
            STAR_KEYFRAMES.last().unwrap().color
        );
    }
}
