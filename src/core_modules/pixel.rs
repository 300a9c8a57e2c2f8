// THEORY:
// The `Pixel` module is the lowest layer of the engine. It is a "dumb" data
// container for a single RGBA sample plus the two scalar measurements every
// analyzer above it is built on: brightness and saturation.
//
// Key architectural principles:
// 1.  **Single Source of Measurement**: Every analyzer (defects, texture,
//     edges, color stats) reasons in terms of brightness and saturation. Both
//     formulas live here and nowhere else, so a threshold like "brightness
//     below 80" means the same thing in every module.
// 2.  **Plain Arithmetic, No Color Science**: Brightness is the channel mean
//     and saturation is (max-min)/max. These are deliberately simple; the
//     engine's thresholds were tuned against these exact formulas, not
//     against perceptual luminance or HSV.
// 3.  **Guarded Degenerate Case**: A fully black pixel has a max channel of
//     zero; its saturation is defined as 0 rather than dividing by zero.

pub mod pixel {
    type Byte = u8;
    type Channel = Byte;
    pub type Brightness = f64;
    pub type Saturation = f64;

    const CHANNELS: usize = 4;

    /// A single RGBA sample from the raster.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Pixel {
        pub red: Channel,
        pub green: Channel,
        pub blue: Channel,
        pub alpha: Channel,
    }

    impl Pixel {
        pub fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
            Pixel {
                red,
                green,
                blue,
                alpha,
            }
        }

        /// Mean of the three color channels, in 0..=255.
        pub fn brightness(&self) -> Brightness {
            (self.red as f64 + self.green as f64 + self.blue as f64) / 3.0
        }

        /// Channel spread relative to the dominant channel, in 0..=1.
        /// A black pixel (max channel 0) has saturation 0.
        pub fn saturation(&self) -> Saturation {
            let max = self.red.max(self.green).max(self.blue);
            if max == 0 {
                return 0.0;
            }
            let min = self.red.min(self.green).min(self.blue);
            (max - min) as f64 / max as f64
        }
    }

    impl From<&[Byte]> for Pixel {
        fn from(bytes: &[Byte]) -> Self {
            if bytes.len() != CHANNELS {
                panic!("Cannot convert {} bytes into pixel.", bytes.len());
            }
            Pixel::new(bytes[0], bytes[1], bytes[2], bytes[3])
        }
    }
}
