use super::{
    layout::LayoutProfile,
    projection::{project, RenderTuple},
    window::{window_of, WindowEntry},
    CarouselError,
};

/// Everything that can move the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// Next item; also what the auto-advance timer sends.
    Advance,
    Retreat,
    JumpTo(usize),
    /// The item list was swapped for one of this length.
    Resize(usize),
}

/// Position of a carousel over `len` items.
///
/// `current` is always in `0..len` and `len` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    current: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::InvalidInput);
        }
        Ok(Self { len, current: 0 })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn advance(self) -> Self {
        Self {
            current: (self.current + 1) % self.len,
            ..self
        }
    }

    #[must_use]
    pub fn retreat(self) -> Self {
        Self {
            current: (self.current + self.len - 1) % self.len,
            ..self
        }
    }

    pub fn jump_to(self, index: usize) -> Result<Self, CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(Self {
            current: index,
            ..self
        })
    }

    pub fn resize(self, len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::InvalidInput);
        }
        Ok(Self {
            len,
            current: self.current % len,
        })
    }

    /// Single transition function; every state change goes through here.
    pub fn apply(self, event: CarouselEvent) -> Result<Self, CarouselError> {
        match event {
            CarouselEvent::Advance => Ok(self.advance()),
            CarouselEvent::Retreat => Ok(self.retreat()),
            CarouselEvent::JumpTo(index) => self.jump_to(index),
            CarouselEvent::Resize(len) => self.resize(len),
        }
    }
}

/// A carousel that owns its items.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    state: CarouselState,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>) -> Result<Self, CarouselError> {
        let state = CarouselState::new(items.len())?;
        Ok(Self { items, state })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn current(&self) -> usize {
        self.state.current()
    }

    pub fn current_item(&self) -> &T {
        &self.items[self.state.current()]
    }

    pub fn advance(&mut self) {
        self.state = self.state.advance();
    }

    pub fn retreat(&mut self) {
        self.state = self.state.retreat();
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        self.state = self.state.jump_to(index)?;
        Ok(())
    }

    /// Apply an event. `Resize` is rejected unless it matches the item count;
    /// use [`Carousel::replace_items`] to change the items.
    pub fn apply(&mut self, event: CarouselEvent) -> Result<(), CarouselError> {
        if let CarouselEvent::Resize(len) = event {
            if len != self.items.len() {
                return Err(CarouselError::OutOfRange {
                    index: len,
                    len: self.items.len(),
                });
            }
        }
        self.state = self.state.apply(event)?;
        Ok(())
    }

    /// Swap in a new item list, keeping the position modulo the new length.
    /// On error the carousel is left untouched.
    pub fn replace_items(&mut self, items: Vec<T>) -> Result<(), CarouselError> {
        self.state = self.state.resize(items.len())?;
        self.items = items;
        Ok(())
    }

    pub fn window(&self, radius: usize) -> Vec<WindowEntry<'_, T>> {
        window_of(&self.items, self.state.current(), radius)
    }

    /// Whether `index` is currently on screen, i.e. a legal jump target for a
    /// click on a side card.
    pub fn is_visible(&self, index: usize, radius: usize) -> bool {
        self.window(radius).iter().any(|entry| entry.index == index)
    }

    pub fn project(&self, layout: &LayoutProfile, radius: usize) -> Vec<RenderTuple<'_, T>> {
        project(&self.window(radius), layout)
    }
}
