//! Colour picker logic, independent of any widget toolkit.
//!
//! The picker owns a colour model and the state of the controls around it: a hex text
//! field, a value slider and a swatch. Widget code forwards user events to it and reads
//! back what to display.

use crate::color::{Decimal, Normalized, SwatchUniform};
use crate::model::{Colour, ColourDescriptor, ColourModel};
use crate::space::ColourSpace;
use crate::value::Value;

/// Callback receiving the colour as normalised RGBA.
type Listener = Box<dyn FnMut(&[f64])>;

/// State and behaviour of a colour picker.
pub struct ColourPicker<M: ColourModel> {
    /// Colour being edited.
    model: M,
    /// Content of the hex text field.
    hex_text: String,
    /// Position of the value slider ([0,100]).
    slider: u8,
    /// Called on every refresh.
    changing: Vec<Listener>,
    /// Called when an edit is complete.
    changed: Vec<Listener>,
}

impl Default for ColourPicker<Colour> {
    /// Picker over an opaque white colour.
    fn default() -> Self {
        let white = Colour::new(&ColourDescriptor {
            colour: Value::from([1.0, 1.0, 1.0, 1.0]),
            ..Default::default()
        })
        .unwrap_or_default();
        Self::new(white)
    }
}

impl<M: ColourModel> ColourPicker<M> {
    /// Create a picker editing `model`, with the controls showing its current colour.
    pub fn new(model: M) -> Self {
        let mut picker = Self {
            model,
            hex_text: String::new(),
            slider: 0,
            changing: Vec::new(),
            changed: Vec::new(),
        };
        picker.refresh(true, true);
        picker
    }

    /// Colour model being edited.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Text the hex field should display.
    pub fn hex_text(&self) -> &str {
        &self.hex_text
    }

    /// Position the value slider should display.
    pub fn slider_value(&self) -> u8 {
        self.slider
    }

    /// Register a callback fired on every change, including intermediate ones.
    pub fn connect_changing<F: FnMut(&[f64]) + 'static>(&mut self, listener: F) {
        self.changing.push(Box::new(listener));
    }

    /// Register a callback fired when an edit is complete.
    pub fn connect_changed<F: FnMut(&[f64]) + 'static>(&mut self, listener: F) {
        self.changed.push(Box::new(listener));
    }

    /// The user typed in the hex field.
    /// Only complete six digit colours are applied; the field keeps the typed text.
    pub fn hex_edited(&mut self, text: &str) {
        self.hex_text = text.to_string();
        if text.trim_start_matches('#').len() == 6 && self.apply(Value::from(text), ColourSpace::Hex)
        {
            self.refresh(false, true);
        }
    }

    /// The user left the hex field.
    pub fn editing_finished(&mut self) {
        self.refresh(true, true);
    }

    /// The user asked to reset the controls to the current colour.
    pub fn reset(&mut self) {
        self.apply_refresh();
        self.refresh(true, true);
    }

    /// The user pasted `text` from the clipboard.
    pub fn paste(&mut self, text: &str) {
        let text = text.trim().to_lowercase();
        self.apply(Value::from(text), ColourSpace::Hex);
        self.refresh(true, true);
    }

    /// The user dragged the value slider to `value` percent.
    pub fn slider_moved(&mut self, value: u8) {
        let value = value.min(100);
        self.slider = value;
        let mut hsv = self.hsv();
        if let Some(v) = hsv.get_mut(2) {
            *v = f64::from(value);
        }
        self.apply(Value::from(hsv), ColourSpace::Hsv);
        self.refresh(true, false);
    }

    /// Current colour as normalised RGBA.
    pub fn colour(&self) -> Vec<f64> {
        self.rgb()
    }

    /// Replace the colour with normalised RGB(A) channels.
    pub fn set_colour<V: Into<Value>>(&mut self, rgb: V) {
        self.apply(rgb.into(), ColourSpace::Rgb);
        self.refresh(true, true);
    }

    /// Current colour as integer hue and percentages.
    pub fn hsv(&self) -> Vec<f64> {
        self.channels(ColourSpace::Hsv)
    }

    /// Current colour as normalised RGBA.
    pub fn rgb(&self) -> Vec<f64> {
        self.channels(ColourSpace::Rgb)
    }

    /// Current colour as six hex digits.
    pub fn hex(&self) -> String {
        self.model
            .get_in(ColourSpace::Hex)
            .as_hex()
            .map(str::to_string)
            .unwrap_or_default()
    }

    /// Style sheet painting the swatch.
    pub fn swatch_style(&self) -> String {
        format!("background-color: #{}", self.hex())
    }

    /// Swatch colour ready for a uniform buffer.
    pub fn swatch_uniform(&self) -> SwatchUniform {
        <[f64; 4]>::try_from(self.rgb().as_slice())
            .map(Normalized::from)
            .unwrap_or_default()
            .clamped()
            .to_uniform()
    }

    /// Read numeric channels from the model.
    fn channels(&self, space: ColourSpace) -> Vec<f64> {
        self.model
            .get_in(space)
            .channels()
            .map(<[f64]>::to_vec)
            .unwrap_or_default()
    }

    /// Send a colour to the model. Returns false if it was rejected.
    fn apply(&mut self, value: Value, space: ColourSpace) -> bool {
        match self.model.set(Some(value), Some(space)) {
            Ok(_) => true,
            Err(err) => {
                log::warn!("Colour picker input rejected: {err}");
                false
            }
        }
    }

    /// Re-apply the model's current colour.
    fn apply_refresh(&mut self) {
        if let Err(err) = self.model.set(None, None) {
            log::warn!("Colour picker refresh failed: {err}");
        }
    }

    /// Notify listeners and resynchronise the controls.
    /// Fires `changed` only when both the hex field and the slider are resynchronised.
    fn refresh(&mut self, hex: bool, slide: bool) {
        let rgb = self.rgb();
        for listener in self.changing.iter_mut() {
            listener(&rgb);
        }
        if hex {
            self.hex_text = self.hex();
        }
        if slide {
            self.slider = self
                .hsv()
                .get(2)
                .map_or(0, |v| v.clamp(0.0, 100.0) as u8);
        }
        if hex && slide {
            for listener in self.changed.iter_mut() {
                listener(&rgb);
            }
        }
    }
}

/// Scale normalised channels to 0-255 integers.
pub fn remap_rgb(rgb: &[f64]) -> Vec<i64> {
    rgb.iter()
        .map(|&channel| Decimal::from(Normalized::new(channel, 0.0, 0.0, 1.0)).r)
        .collect()
}
