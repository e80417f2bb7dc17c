use log::{debug, error};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// A place where stylesheets live under well-known ids.
pub trait StyleRegistry: Clone {
    /// Handle to one installed sheet.
    type Sheet;

    /// Installs `css` under `id`, replacing whatever was there.
    fn install(&self, id: &str, css: &str) -> Result<Self::Sheet, JsValue>;
    /// Removes exactly `sheet`. A sheet already replaced by a newer install
    /// is gone, so this is then a no-op.
    fn release(&self, sheet: Self::Sheet);
    /// Removes every sheet under `id`. Missing ids are ignored.
    fn remove(&self, id: &str);
    fn count(&self, id: &str) -> usize;
}

/// `<style>` elements appended to `document.head`.
#[derive(Clone)]
pub struct DocumentRegistry {
    document: Document,
}

impl DocumentRegistry {
    /// Panics outside a browser page: the background cannot exist without
    /// a live document.
    pub fn current() -> Self {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("style registry requires a live document");
        Self { document }
    }
}

impl StyleRegistry for DocumentRegistry {
    type Sheet = Element;

    fn install(&self, id: &str, css: &str) -> Result<Element, JsValue> {
        self.remove(id);
        let head = self
            .document
            .head()
            .expect("style registry requires a document head");
        let sheet = self.document.create_element("style")?;
        sheet.set_id(id);
        sheet.set_text_content(Some(css));
        head.append_child(&sheet)?;
        Ok(sheet)
    }

    fn release(&self, sheet: Element) {
        // detached elements ignore remove()
        sheet.remove();
    }

    fn remove(&self, id: &str) {
        while let Some(existing) = self.document.get_element_by_id(id) {
            existing.remove();
        }
    }

    fn count(&self, id: &str) -> usize {
        self.document
            .query_selector_all(&format!("style#{}", id))
            .map(|list| list.length() as usize)
            .unwrap_or(0)
    }
}

#[cfg(test)]
pub use memory::MemoryRegistry;

#[cfg(test)]
mod memory {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsValue;

    use super::StyleRegistry;

    #[derive(Default)]
    struct Sheets {
        next_generation: u64,
        entries: Vec<(String, u64, String)>,
    }

    /// In-process registry for DOM-free tests. Each install gets a fresh
    /// generation number that serves as its release token.
    #[derive(Clone, Default)]
    pub struct MemoryRegistry {
        sheets: Rc<RefCell<Sheets>>,
    }

    impl MemoryRegistry {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn css(&self, id: &str) -> Option<String> {
            self.sheets
                .borrow()
                .entries
                .iter()
                .find(|(sheet_id, _, _)| sheet_id == id)
                .map(|(_, _, css)| css.clone())
        }

        pub fn contains(&self, id: &str) -> bool {
            self.count(id) > 0
        }

        pub fn len(&self) -> usize {
            self.sheets.borrow().entries.len()
        }

        pub fn is_empty(&self) -> bool {
            self.sheets.borrow().entries.is_empty()
        }
    }

    impl StyleRegistry for MemoryRegistry {
        type Sheet = u64;

        fn install(&self, id: &str, css: &str) -> Result<u64, JsValue> {
            let mut sheets = self.sheets.borrow_mut();
            sheets.entries.retain(|(sheet_id, _, _)| sheet_id != id);
            sheets.next_generation += 1;
            let generation = sheets.next_generation;
            sheets.entries.push((id.to_string(), generation, css.to_string()));
            Ok(generation)
        }

        fn release(&self, sheet: u64) {
            self.sheets
                .borrow_mut()
                .entries
                .retain(|(_, generation, _)| *generation != sheet);
        }

        fn remove(&self, id: &str) {
            self.sheets
                .borrow_mut()
                .entries
                .retain(|(sheet_id, _, _)| sheet_id != id);
        }

        fn count(&self, id: &str) -> usize {
            self.sheets
                .borrow()
                .entries
                .iter()
                .filter(|(sheet_id, _, _)| sheet_id == id)
                .count()
        }
    }
}

/// Owns the sheet it installed for as long as it lives; dropping it removes
/// that sheet and never one installed later under the same id.
pub struct StyleGuard<R: StyleRegistry> {
    registry: R,
    id: &'static str,
    sheet: Option<R::Sheet>,
}

impl<R: StyleRegistry> StyleGuard<R> {
    pub fn acquire(registry: &R, id: &'static str, css: &str) -> Self {
        let sheet = match registry.install(id, css) {
            Ok(sheet) => {
                debug!("Installed stylesheet {} ({} bytes)", id, css.len());
                Some(sheet)
            }
            Err(e) => {
                error!("Failed to install stylesheet {}: {:?}", id, e);
                None
            }
        };
        Self {
            registry: registry.clone(),
            id,
            sheet,
        }
    }
}

impl<R: StyleRegistry> Drop for StyleGuard<R> {
    fn drop(&mut self) {
        if let Some(sheet) = self.sheet.take() {
            self.registry.release(sheet);
            debug!(
                "Released stylesheet {} ({} left under this id)",
                self.id,
                self.registry.count(self.id)
            );
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sheet_text(id: &str) -> Option<String> {
        DocumentRegistry::current()
            .document
            .get_element_by_id(id)
            .and_then(|sheet| sheet.text_content())
    }

    #[wasm_bindgen_test]
    fn install_replaces_the_style_element() {
        let registry = DocumentRegistry::current();
        let _first = registry.install("registry-replace", "a {}").unwrap();
        let second = registry.install("registry-replace", "b {}").unwrap();
        assert_eq!(registry.count("registry-replace"), 1);
        assert_eq!(sheet_text("registry-replace").as_deref(), Some("b {}"));

        registry.release(second);
        assert_eq!(registry.count("registry-replace"), 0);
        registry.remove("registry-replace");
    }

    #[wasm_bindgen_test]
    fn stale_guard_leaves_the_newer_style_element() {
        let registry = DocumentRegistry::current();
        let old = StyleGuard::acquire(&registry, "registry-guard", "old {}");
        let new = StyleGuard::acquire(&registry, "registry-guard", "new {}");

        drop(old);
        assert_eq!(registry.count("registry-guard"), 1);
        assert_eq!(sheet_text("registry-guard").as_deref(), Some("new {}"));

        drop(new);
        assert_eq!(registry.count("registry-guard"), 0);
    }

    #[wasm_bindgen_test]
    fn removing_a_missing_id_leaves_the_head_untouched() {
        let registry = DocumentRegistry::current();
        let head = registry.document.head().unwrap();
        let before = head.child_element_count();
        registry.remove("registry-never-installed");
        assert_eq!(head.child_element_count(), before);
    }
}
