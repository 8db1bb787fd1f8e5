pub mod nil;

/// Anything that can render itself as text.
pub trait Shower {
    fn show(&self) -> String;
}

impl<T: Shower + ?Sized> Shower for &T {
    fn show(&self) -> String {
        (**self).show()
    }
}

impl<T: Shower + ?Sized> Shower for Box<T> {
    fn show(&self) -> String {
        (**self).show()
    }
}

/// Show any shower through dynamic dispatch. Returns its text unchanged.
pub fn describe(value: &dyn Shower) -> String {
    let text = value.show();
    log::trace!("describe -> {:?}", text);
    text
}
