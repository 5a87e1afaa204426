//! Snowman artwork, one image per mistake count

/// Meltdown stages from the full snowman (no mistakes) to the hat alone
pub const SNOWMAN_STAGES: &[&str] = &[
    // Full snowman
    r"
     ___
    /___\
    (o o)
    ( : )
   (  :  )
  (   :   )
 (    :    )
",
    r"
     ___
    /___\
    (o o)
    ( : )
   (  :  )
  (   :   )
",
    r"
     ___
    /___\
    (o o)
    ( : )
   (  :  )
",
    r"
     ___
    /___\
    (o o)
    ( : )
",
    r"
     ___
    /___\
    (o o)
",
    // Completely melted
    r"
     ___
    /___\
",
];
