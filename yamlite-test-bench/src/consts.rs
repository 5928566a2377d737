pub const MAP_SIMPLE_INPUT: &str = r"
period: 10
pduSize: 200
";
pub const MAP_SIMPLE_TOKENS: &str = r"
=KEY period
=VAL 10
=KEY pduSize
=VAL 200
-END";

pub const SPACED_VALUE_INPUT: &str = r"
name  :   si session one
";
pub const SPACED_VALUE_TOKENS: &str = r"
=KEY name
=VAL si session one
-END";

pub const LIST_INPUT: &str = r"
- alpha
- beta:
- gamma
";
pub const LIST_TOKENS: &str = r"
+MEM alpha
+MEM beta
+MEM gamma
-END";

pub const COMMENT_INPUT: &str = r"
# note
key: 5
";
pub const COMMENT_TOKENS: &str = r"
#COM  note
=KEY key
=VAL 5
-END";

pub const NULL_VALUE_INPUT: &str = r"
empty:
next: 1
";
pub const NULL_VALUE_TOKENS: &str = r"
=KEY empty
=NUL
=KEY next
=VAL 1
-END";

pub const UNKNOWN_INPUT: &str = r"
stray words
@
key: 1
";
pub const UNKNOWN_TOKENS: &str = r"
?UNK
?UNK
=KEY key
=VAL 1
-END";

pub const SESSIONS_INPUT: &str = r"
# SI session schedule
- siSession:
    period: 10
    pduSize: 200
    rep: 1
    siId: 1
- siSession:
    period: 20
    pduSize: 128
    rep: 2
    siId: 2
";
pub const SESSIONS_FLAT_TOKENS: &str = r"
#COM  SI session schedule
+MEM siSession
=KEY period
=VAL 10
=KEY pduSize
=VAL 200
=KEY rep
=VAL 1
=KEY siId
=VAL 1
+MEM siSession
=KEY period
=VAL 20
=KEY pduSize
=VAL 128
=KEY rep
=VAL 2
=KEY siId
=VAL 2
-END";

pub const NESTED_INPUT: &str = r"
- siSession:
    period: 10
    pduSize: 200
tail: 7
";
pub const GAPPED_BLOCK_INPUT: &str = r"
- siSession:
    period: 10

    pduSize: 200
tail: 7
";
pub const NESTED_BLOCK_TOKENS: &str = r"
=KEY period
=VAL 10
=KEY pduSize
=VAL 200
-END";
pub const NESTED_TAIL_TOKENS: &str = r"
=KEY tail
=VAL 7
-END";

pub const EMPTY_BLOCK_INPUT: &str = r"
- siSession
tail: 7
";

pub const SIBLING_INPUT: &str = r"
- a:
    x: 1
- b:
    y: 2
";
pub const SIBLING_A_TOKENS: &str = r"
=KEY x
=VAL 1
-END";
pub const SIBLING_B_TOKENS: &str = r"
=KEY y
=VAL 2
-END";
