use crate::term::Stream;

/// Determine whether the stream is connected to a terminal.
pub(crate) fn is_tty(stream: Stream) -> bool {
    let fd = match stream {
        Stream::Stdout => libc::STDOUT_FILENO,
        Stream::Stderr => libc::STDERR_FILENO,
    };

    unsafe { libc::isatty(fd) == 1 }
}

/// Switch the process locale to UTF-8 English for all categories.
///
/// `setlocale` returns null when the locale is unavailable; the previous
/// locale stays in effect and that is the end of it.
pub(crate) fn use_utf8() {
    let _ = unsafe { libc::setlocale(libc::LC_ALL, c"en_US.UTF-8".as_ptr()) };
}

/// Get the terminal title. Unix has no portable title query.
pub(crate) fn title() -> String {
    String::new()
}
