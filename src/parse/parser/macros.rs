macro_rules! expect_if {
    ($self:ident, $( $pattern:pat )|+ $( if $guard: expr )?) => {
        match $self.peek_kind() {
            $( $pattern )|+ $( if $guard )? => {
                $self.bump();
                true
            },
            _ => false
        }
    }
}

macro_rules! peek {
    ($self:ident, $( $pattern:pat )|+ $( if $guard: expr )?) => {
        match $self.peek_kind() {
            $( $pattern )|+ $( if $guard )? => true,
            _ => false
        }
    }
}
