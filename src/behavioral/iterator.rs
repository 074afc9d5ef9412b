// Iterator: walk a container through a cursor object instead of reaching into
// its storage. The cursor can be rewound and never changes the container.

use crate::trace::Trace;

#[derive(Debug, Clone, Default)]
pub struct Container<T> {
    data: Vec<T>,
}

impl<T> Container<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn add(&mut self, item: T) {
        self.data.push(item);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn create_iterator(&self) -> ContainerIter<'_, T> {
        ContainerIter {
            container: self,
            position: 0,
        }
    }
}

/// Cursor over a [`Container`].
///
/// The explicit protocol is `first` / `is_done` / `current` / `advance`.
/// It also implements [`Iterator`], yielding the current item and moving on.
pub struct ContainerIter<'a, T> {
    container: &'a Container<T>,
    position: usize,
}

impl<'a, T> ContainerIter<'a, T> {
    pub fn first(&mut self) {
        self.position = 0;
    }

    /// The cursor's `next` step; named apart from `Iterator::next`, which also yields.
    pub fn advance(&mut self) {
        if !self.is_done() {
            self.position += 1;
        }
    }

    pub fn is_done(&self) -> bool {
        self.position >= self.container.data.len()
    }

    pub fn current(&self) -> Option<&'a T> {
        self.container.data.get(self.position)
    }
}

impl<'a, T> Iterator for ContainerIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.current()?;
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.container.data.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = ContainerIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.create_iterator()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Data {
    value: i32,
}

impl Data {
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    pub fn data(&self) -> i32 {
        self.value
    }
}

pub fn demo() -> Trace {
    let mut trace = Trace::new();

    trace.line("________________Iterator with int________________");
    let mut ints = Container::new();
    for i in 0..10 {
        ints.add(i);
    }
    let mut it = ints.create_iterator();
    it.first();
    while !it.is_done() {
        if let Some(value) = it.current() {
            trace.line(value.to_string());
        }
        it.advance();
    }

    trace.line("________________Iterator with Data________________");
    let mut records = Container::new();
    records.add(Data::new(100));
    records.add(Data::new(1000));
    records.add(Data::new(10000));
    for record in &records {
        trace.line(record.data().to_string());
    }

    trace
}
