//! The full logo: logomark and logotype placed side by side or stacked.

use std::str::FromStr;

use crate::canvas::{Canvas, ClearSpace};
use crate::compose::{GlyphFills, Logotype};
use crate::defaults;
use crate::errors::{ConfigError, Error};
use crate::geometry::{BBox, Vector};
use crate::log::debug;
use crate::scene::{Defs, Element, Group, Scene, Transform};
use crate::shapes::{LambdaParams, Snowflake};
use crate::style::Color;

/// Where the logotype goes relative to the logomark
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LogoLayout {
    /// Logotype to the right, vertically centered.
    #[default]
    Horizontal,
    /// Logotype below, horizontally centered.
    Vertical,
}

impl FromStr for LogoLayout {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(LogoLayout::Horizontal),
            "vertical" => Ok(LogoLayout::Vertical),
            _ => Err(ConfigError::UnknownVariant {
                kind: "logo layout",
                value: s.to_string(),
            }),
        }
    }
}

/// How the snowflake arms are filled
#[derive(Clone, Debug, PartialEq)]
pub enum LogomarkPaint {
    /// One color per arm, cycling.
    Flat(Vec<Color>),
    /// One three-stop gradient per arm, cycling.
    Gradient(Vec<[Color; 3]>),
}

impl Default for LogomarkPaint {
    fn default() -> Self {
        LogomarkPaint::Flat(vec![
            Color::from(defaults::DARK_BLUE),
            Color::from(defaults::LIGHT_BLUE),
        ])
    }
}

/// Cap-height that matches the logotype to a logomark built from `params`.
pub fn default_cap_height(params: &LambdaParams) -> f64 {
    params.radius() * (1.0 + 2.0 * params.thickness()) * 3f64.sqrt()
}

/// Logomark plus logotype
#[derive(Clone, Debug, PartialEq)]
pub struct Logo {
    snowflake: Snowflake,
    logotype: Logotype,
    layout: LogoLayout,
}

impl Logo {
    pub fn new(snowflake: Snowflake, logotype: Logotype, layout: LogoLayout) -> Self {
        Logo {
            snowflake,
            logotype,
            layout,
        }
    }

    pub fn snowflake(&self) -> &Snowflake {
        &self.snowflake
    }

    pub fn logotype(&self) -> &Logotype {
        &self.logotype
    }

    /// Translation applied to the composed logotype.
    pub fn logotype_offset(&self) -> Vector {
        let cap = self.logotype.cap_height();
        match self.layout {
            LogoLayout::Horizontal => Vector::new(self.snowflake.circumradius(), cap / 2.0),
            LogoLayout::Vertical => Vector::new(
                -self.logotype.bounds().center().x,
                self.snowflake.inradius() + defaults::VERTICAL_LOGOTYPE_DROP * cap,
            ),
        }
    }

    pub fn bounds(&self) -> BBox {
        self.snowflake
            .bounds()
            .union(&self.logotype.bounds().translate(self.logotype_offset()))
    }

    /// Margin around the whole logo, relative to the logomark's full height.
    pub fn clear_space(&self, clear_space: ClearSpace) -> f64 {
        clear_space.margin(self.snowflake.bounds().height())
    }

    pub fn canvas(&self, clear_space: ClearSpace) -> Result<Canvas, Error> {
        Ok(Canvas::around(&self.bounds(), self.clear_space(clear_space))?)
    }

    /// Logomark elements, gradient definitions first when there are any.
    pub fn logomark_elements(&self, paint: &LogomarkPaint) -> Result<Vec<Element>, Error> {
        match paint {
            LogomarkPaint::Flat(colors) => Ok(self.snowflake.flat_elements(colors)?),
            LogomarkPaint::Gradient(palette) => {
                let axis = self.snowflake.gradient_axis();
                let defs = Defs {
                    gradients: palette.iter().map(|c| axis.gradient(c.clone())).collect(),
                    ..Default::default()
                };
                let mut elements = vec![defs.into()];
                elements.extend(self.snowflake.gradient_elements(palette)?);
                Ok(elements)
            }
        }
    }

    /// Complete scene on a canvas sized by `clear_space`.
    pub fn scene(
        &self,
        paint: &LogomarkPaint,
        fills: &GlyphFills,
        clear_space: ClearSpace,
        background: Option<Color>,
    ) -> Result<Scene, Error> {
        let canvas = self.canvas(clear_space)?;
        let mut scene = Scene::new(canvas.view_box());
        if let Some(color) = background {
            scene.push(canvas.background(Some(color)));
        }
        scene.extend(self.logomark_elements(paint)?);
        scene.push(
            Group::new(self.logotype.to_elements(fills))
                .with_transforms(vec![Transform::Translate(self.logotype_offset())]),
        );
        debug!(layout = ?self.layout, width = canvas.width(), "logo scene built");
        Ok(scene)
    }
}
