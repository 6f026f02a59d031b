/// Collects iteration records when tracing is requested.
///
/// With tracing off, `push` drops the record and the final trace is empty.
pub(crate) struct Trace<R> {
    records: Vec<R>,
    enabled: bool,
}

impl<R> Trace<R> {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            records: Vec::new(),
            enabled,
        }
    }

    pub(crate) fn push(&mut self, record: R) {
        if self.enabled {
            self.records.push(record);
        }
    }

    pub(crate) fn into_records(self) -> Vec<R> {
        self.records
    }
}
