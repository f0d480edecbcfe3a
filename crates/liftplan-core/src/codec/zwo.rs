//! The third-party interval XML format (`.zwo`).
//!
//! The mapping is lossy by design. Export converts only cardio blocks that
//! carry a duration into fixed-power `<SteadyState>` segments; strength
//! blocks and duration-less cardio are dropped. Import turns every segment
//! with a duration into a `cardio/interval` block with a zone derived from
//! the segment power. The only round-trip contract is duration plus a coarse
//! zone approximation.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::block::{clamp_zone, Block, BlockKind, CardioKind, ZONE_MAX, ZONE_MIN};
use crate::error::IntervalError;
use crate::workout::{Workout, DEFAULT_TITLE};

/// Midpoint power fraction (of threshold power) for each zone.
const ZONE_POWER: [f32; 6] = [0.50, 0.65, 0.80, 0.95, 1.10, 1.25];

/// Power fraction a zone exports as.
pub fn zone_to_power(zone: u8) -> f32 {
    ZONE_POWER[(clamp_zone(zone) - 1) as usize]
}

/// Nearest zone for an imported power fraction.
pub fn power_to_zone(power: f32) -> u8 {
    for zone in ZONE_MIN..ZONE_MAX {
        let upper = (ZONE_POWER[(zone - 1) as usize] + ZONE_POWER[zone as usize]) / 2.0;
        if power < upper {
            return zone;
        }
    }
    ZONE_MAX
}

/// Document-shell fields the exporter needs beyond the workout itself.
#[derive(Debug, Clone)]
pub struct ZwoOptions {
    pub author: String,
    pub sport_type: String,
}

impl Default for ZwoOptions {
    fn default() -> Self {
        Self {
            author: "liftplan".to_string(),
            sport_type: "bike".to_string(),
        }
    }
}

/// Export with default shell options.
pub fn encode(workout: &Workout) -> Result<String, IntervalError> {
    encode_with(workout, &ZwoOptions::default())
}

/// Export a workout as an interval XML document.
pub fn encode_with(workout: &Workout, options: &ZwoOptions) -> Result<String, IntervalError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Start(BytesStart::new("workout_file")))?;
    write_text_element(&mut writer, "author", &options.author)?;
    write_text_element(&mut writer, "name", &workout.title)?;
    write_text_element(&mut writer, "sportType", &options.sport_type)?;

    writer.write_event(Event::Start(BytesStart::new("workout")))?;
    for block in &workout.blocks {
        let BlockKind::Cardio { zone, .. } = block.kind else {
            continue;
        };
        let Some(minutes) = block.duration() else {
            continue;
        };
        let power = zone_to_power(zone.unwrap_or(ZONE_MIN));
        let mut segment = BytesStart::new("SteadyState");
        segment.push_attribute(("Duration", (u64::from(minutes) * 60).to_string().as_str()));
        segment.push_attribute(("Power", format!("{power:.2}").as_str()));
        writer.write_event(Event::Empty(segment))?;
    }
    writer.write_event(Event::End(BytesEnd::new("workout")))?;
    writer.write_event(Event::End(BytesEnd::new("workout_file")))?;

    Ok(String::from_utf8(writer.into_inner())?)
}

/// Import an interval XML document as `(name, blocks)`.
///
/// Every segment element carrying a `Duration` attribute becomes a
/// `cardio/interval` block; everything else in the file is ignored.
///
/// # Errors
///
/// [`IntervalError::Xml`] for unparseable XML and [`IntervalError::Malformed`]
/// for a document with no workout element or unparseable segment attributes.
pub fn decode(xml: &str) -> Result<(String, Vec<Block>), IntervalError> {
    let mut reader = Reader::from_str(xml);
    let mut blocks = Vec::new();
    let mut title = DEFAULT_TITLE.to_string();
    let mut in_name = false;
    let mut saw_workout = false;

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Start(element) => match element.name().as_ref() {
                b"name" => in_name = true,
                b"workout_file" | b"workout" => saw_workout = true,
                _ => push_segment(&element, &mut blocks)?,
            },
            Event::Empty(element) => push_segment(&element, &mut blocks)?,
            Event::Text(text) => {
                if in_name {
                    title = text.unescape()?.trim().to_string();
                }
            }
            Event::End(element) => {
                if element.name().as_ref() == b"name" {
                    in_name = false;
                }
            }
            _ => {}
        }
    }

    if !saw_workout {
        return Err(IntervalError::Malformed(
            "no workout element in document".to_string(),
        ));
    }

    Ok((title, blocks))
}

fn push_segment(element: &BytesStart, blocks: &mut Vec<Block>) -> Result<(), IntervalError> {
    let Some(seconds) = attr_f32(element, "Duration")? else {
        return Ok(());
    };

    // Ramps carry PowerLow/PowerHigh instead of a single Power; use the
    // midpoint. Segments with no power at all land in the lowest zone.
    let power = match attr_f32(element, "Power")? {
        Some(power) => power,
        None => match (attr_f32(element, "PowerLow")?, attr_f32(element, "PowerHigh")?) {
            (Some(low), Some(high)) => (low + high) / 2.0,
            _ => zone_to_power(ZONE_MIN),
        },
    };

    let minutes = (seconds / 60.0).round().max(1.0) as u32;
    blocks.push(
        Block::new(BlockKind::Cardio {
            subtype: CardioKind::Interval,
            duration: Some(minutes),
            zone: Some(power_to_zone(power)),
            heart_rate: None,
            cadence: None,
        })
        .with_description("Interval"),
    );
    Ok(())
}

fn attr_f32(element: &BytesStart, name: &str) -> Result<Option<f32>, IntervalError> {
    let Some(attribute) = element.try_get_attribute(name)? else {
        return Ok(None);
    };
    let text = attribute.unescape_value()?;
    text.trim()
        .parse::<f32>()
        .map(Some)
        .map_err(|_| IntervalError::Malformed(format!("bad {name} attribute: '{text}'")))
}

fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> Result<(), IntervalError> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
