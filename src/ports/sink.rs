/// Write-only textual log destination. Writes are fire-and-forget.
pub trait LogSink: Send + Sync {
    fn write(&self, tag: &str, message: &str);
}
