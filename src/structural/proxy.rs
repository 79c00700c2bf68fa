// Proxy Pattern: a virtual proxy defers the expensive image load until the
// first `display`, then reuses the loaded image.

use crate::console::Console;
use std::cell::OnceCell;
use tracing::debug;

pub trait Image {
    fn display(&self) -> Vec<String>;
}

pub struct RealImage {
    filename: String,
}

impl RealImage {
    /// Loading happens here; the returned line is what the load reports.
    pub fn load(filename: impl Into<String>) -> (Self, String) {
        let filename = filename.into();
        debug!(%filename, "loading image from disk");
        let message = format!("Loading {}", filename);
        (Self { filename }, message)
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }
}

impl Image for RealImage {
    fn display(&self) -> Vec<String> {
        vec![format!("Displaying {}", self.filename)]
    }
}

pub struct ProxyImage {
    filename: String,
    real: OnceCell<RealImage>,
}

impl ProxyImage {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            real: OnceCell::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.real.get().is_some()
    }
}

impl Image for ProxyImage {
    fn display(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let real = self.real.get_or_init(|| {
            let (image, message) = RealImage::load(self.filename.clone());
            lines.push(message);
            image
        });
        lines.extend(real.display());
        lines
    }
}

pub fn demo(console: &mut Console) {
    let image1 = ProxyImage::new("Photo1.jpg");
    let image2 = ProxyImage::new("Photo2.jpg");
    console.line(format!("Images created, loaded: {}", image1.is_loaded() || image2.is_loaded()));

    console.line("Displaying first image...");
    console.lines(image1.display());
    console.line("Displaying second image...");
    console.lines(image2.display());
    console.line("Displaying first image again...");
    console.lines(image1.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_is_lazy() {
        let proxy = ProxyImage::new("a.jpg");
        assert!(!proxy.is_loaded());

        let lines = proxy.display();
        assert!(proxy.is_loaded());
        assert_eq!(lines, vec!["Loading a.jpg", "Displaying a.jpg"]);
    }

    #[test]
    fn test_proxy_loads_once() {
        let proxy = ProxyImage::new("a.jpg");
        proxy.display();
        assert_eq!(proxy.display(), vec!["Displaying a.jpg"]);
    }

    #[test]
    fn test_real_image_loads_eagerly() {
        let (image, message) = RealImage::load("b.png");
        assert_eq!(message, "Loading b.png");
        assert_eq!(image.filename(), "b.png");
        assert_eq!(image.display(), vec!["Displaying b.png"]);
    }

    #[test]
    fn test_demo_transcript() {
        let mut console = Console::capture();
        demo(&mut console);
        assert_eq!(
            console.transcript(),
            &[
                "Images created, loaded: false",
                "Displaying first image...",
                "Loading Photo1.jpg",
                "Displaying Photo1.jpg",
                "Displaying second image...",
                "Loading Photo2.jpg",
                "Displaying Photo2.jpg",
                "Displaying first image again...",
                "Displaying Photo1.jpg",
            ]
        );
    }
}
