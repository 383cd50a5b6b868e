#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;

#[cfg(not(target_arch = "wasm32"))]
pub mod helpers {
    use crate::router::Navigator;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Navigator backed by a shared log of pushed paths, for asserting on
    /// navigation instead of touching `window.location`.
    pub fn recording_navigator() -> (Navigator, Rc<RefCell<Vec<String>>>) {
        let pushed: Rc<RefCell<Vec<String>>> = Rc::default();
        let log = pushed.clone();
        let navigator = Navigator::new(move |path| log.borrow_mut().push(path.to_string()));
        (navigator, pushed)
    }
}
